pub mod account_repository;

// Re-export for convenient access
pub use account_repository::AccountRepository;
