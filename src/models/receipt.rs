//! Receipt types returned by the purchase-recording path.

use serde::{Deserialize, Serialize};

/// Bonus paid to a referrer when a referred account lands on a
/// streak milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralPayout {
    pub referrer: String,
    pub bonus: i64,
}

/// Result of recording one purchase.
///
/// Streak and volume rewards are itemized so callers can report each
/// payout on its own; `total_rewards` already includes both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub wallet: String,
    pub streak_days: u32,
    pub total_volume: i64,
    /// Flat milestone reward for the resulting streak length (0 off-milestone)
    pub streak_reward: i64,
    /// One-time rewards for volume thresholds crossed by this purchase
    pub volume_reward: i64,
    pub total_rewards: i64,
    /// Present when a streak reward also paid the account's referrer
    pub referral_payout: Option<ReferralPayout>,
}

impl PurchaseReceipt {
    /// Total reward credited to the purchasing account by this call
    pub fn reward(&self) -> i64 {
        self.streak_reward + self.volume_reward
    }
}
