use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// User account indexed by wallet address.
///
/// `total_volume` and `total_rewards` are monotone non-decreasing;
/// `referred_by` is set at most once and never points at the account
/// itself. Accounts are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub wallet: String,
    /// External chat identity linked at verification time
    pub chat_handle: Option<String>,
    /// Gates reward-bearing operations
    pub verified: bool,
    /// Consecutive UTC calendar days with at least one purchase
    pub streak_days: u32,
    /// Calendar date of the most recent purchase (no time-of-day)
    pub last_purchase: Option<NaiveDate>,
    pub total_volume: i64,
    pub total_rewards: i64,
    /// Number of accounts naming this one as their referrer
    pub referral_count: u32,
    pub referred_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl UserAccount {
    /// Create a fresh account with zeroed counters
    pub fn new(
        wallet: String,
        chat_handle: Option<String>,
        verified: bool,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            wallet,
            chat_handle,
            verified,
            streak_days: 0,
            last_purchase: None,
            total_volume: 0,
            total_rewards: 0,
            referral_count: 0,
            referred_by: None,
            created_at,
        }
    }
}
