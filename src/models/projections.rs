//! Read-only projections over ledger state.

use crate::models::UserAccount;
use serde::{Deserialize, Serialize};

/// Per-wallet status summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatus {
    pub wallet: String,
    pub verified: bool,
    pub streak_days: u32,
    pub total_volume: i64,
    pub total_rewards: i64,
    pub referral_count: u32,
}

impl From<&UserAccount> for AccountStatus {
    fn from(account: &UserAccount) -> Self {
        Self {
            wallet: account.wallet.clone(),
            verified: account.verified,
            streak_days: account.streak_days,
            total_volume: account.total_volume,
            total_rewards: account.total_rewards,
            referral_count: account.referral_count,
        }
    }
}

/// Accrued rewards, informational only; no transfer is modeled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimableRewards {
    pub wallet: String,
    pub total_rewards: i64,
}

/// Referral linkage summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralSummary {
    pub wallet: String,
    pub referral_count: u32,
    pub referred_by: Option<String>,
}

/// One row of a leaderboard ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub wallet: String,
    pub value: i64,
}

/// Top-n verified accounts by each metric, independently ranked.
/// Ties keep account-creation order (first created wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub by_volume: Vec<LeaderboardEntry>,
    pub by_rewards: Vec<LeaderboardEntry>,
    pub by_referrals: Vec<LeaderboardEntry>,
}
