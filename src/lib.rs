//! MyNala Ledger Library
//!
//! Reward accrual and streak bookkeeping for the MyNala community bot:
//! per-wallet purchase streaks, cumulative volume, milestone rewards and
//! referral bonuses, behind a single serialized account book. The chat
//! transport that parses commands and formats replies lives elsewhere
//! and calls in through [`AppState`].

pub mod accrual;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use config::CreationPolicy;
use repositories::AccountRepository;
use services::{LedgerService, QueryService};
use std::sync::Arc;

/// Application state containing the account book and services
pub struct AppState {
    pub account_repo: Arc<AccountRepository>,
    pub ledger: Arc<LedgerService>,
    pub query: Arc<QueryService>,
}

impl AppState {
    /// Create a new AppState with an empty account book
    pub fn new(creation_policy: CreationPolicy) -> Self {
        let account_repo = Arc::new(AccountRepository::new());

        Self {
            ledger: Arc::new(LedgerService::new(account_repo.clone(), creation_policy)),
            query: Arc::new(QueryService::new(account_repo.clone())),
            account_repo,
        }
    }
}
