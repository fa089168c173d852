//! Domain models for the MyNala reward ledger.
//!
//! This module contains the account record owned by the ledger plus the
//! receipt and projection types returned to the chat transport.

pub mod account;
pub mod projections;
pub mod receipt;

// Re-export all models for convenient access
pub use account::UserAccount;
pub use projections::{AccountStatus, ClaimableRewards, Leaderboard, LeaderboardEntry, ReferralSummary};
pub use receipt::{PurchaseReceipt, ReferralPayout};
