pub mod ledger_service;
pub mod query_service;

pub use ledger_service::LedgerService;
pub use query_service::QueryService;
