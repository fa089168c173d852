//! Milestone reward tables and payout arithmetic.
//!
//! All amounts are whole $MN tokens.

/// Flat rewards for exact buy-streak milestones: (streak days, reward).
pub const STREAK_MILESTONES: [(u32, i64); 5] = [
    (3, 50_000),
    (5, 100_000),
    (7, 200_000),
    (14, 500_000),
    (30, 1_000_000),
];

/// One-time rewards for cumulative volume thresholds: (volume, reward).
pub const VOLUME_MILESTONES: [(i64, i64); 3] = [
    (500, 250_000),
    (1_000, 500_000),
    (2_000, 1_000_000),
];

/// Referral bonus rate: 5% of the triggering streak reward.
const REFERRAL_BONUS_PERCENT: i64 = 5;

/// Ceiling on a single referral bonus payout.
pub const REFERRAL_BONUS_CAP: i64 = 500_000;

/// Reward for landing on an exact streak-day milestone, 0 otherwise.
///
/// This is a straight re-lookup per purchase event, not a running
/// maximum: an account that breaks a long streak earns the small
/// milestones again on the way back up.
pub fn streak_reward(streak_days: u32) -> i64 {
    STREAK_MILESTONES
        .iter()
        .find(|(days, _)| *days == streak_days)
        .map(|(_, reward)| *reward)
        .unwrap_or(0)
}

/// Sum of volume-milestone rewards crossed by moving cumulative volume
/// from `before` to `after`.
///
/// Each threshold pays exactly once, on the purchase whose running
/// total first reaches it; a single large purchase may cross several
/// thresholds and collects all of them.
pub fn volume_rewards(before: i64, after: i64) -> i64 {
    VOLUME_MILESTONES
        .iter()
        .filter(|(threshold, _)| before < *threshold && *threshold <= after)
        .map(|(_, reward)| *reward)
        .sum()
}

/// Referral bonus owed on a streak reward: 5%, rounded down, capped.
pub fn referral_bonus(streak_reward: i64) -> i64 {
    (streak_reward * REFERRAL_BONUS_PERCENT / 100).min(REFERRAL_BONUS_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_reward_exact_milestones() {
        assert_eq!(streak_reward(3), 50_000);
        assert_eq!(streak_reward(5), 100_000);
        assert_eq!(streak_reward(7), 200_000);
        assert_eq!(streak_reward(14), 500_000);
        assert_eq!(streak_reward(30), 1_000_000);
    }

    #[test]
    fn test_streak_reward_off_milestone_is_zero() {
        for days in [0, 1, 2, 4, 6, 8, 13, 15, 29, 31, 100] {
            assert_eq!(streak_reward(days), 0, "streak {} should pay nothing", days);
        }
    }

    #[test]
    fn test_volume_rewards_single_crossing() {
        assert_eq!(volume_rewards(400, 600), 250_000);
        assert_eq!(volume_rewards(900, 1_100), 500_000);
    }

    #[test]
    fn test_volume_rewards_exact_threshold_counts() {
        assert_eq!(volume_rewards(499, 500), 250_000);
    }

    #[test]
    fn test_volume_rewards_no_double_payment() {
        // Already past the threshold: nothing new is owed.
        assert_eq!(volume_rewards(500, 700), 0);
        assert_eq!(volume_rewards(2_000, 5_000), 0);
    }

    #[test]
    fn test_volume_rewards_multi_crossing() {
        // One purchase sweeping all three thresholds collects them all.
        assert_eq!(volume_rewards(0, 2_500), 250_000 + 500_000 + 1_000_000);
    }

    #[test]
    fn test_referral_bonus_is_five_percent_floored() {
        assert_eq!(referral_bonus(50_000), 2_500);
        assert_eq!(referral_bonus(1_000_000), 50_000);
        assert_eq!(referral_bonus(99), 4);
        assert_eq!(referral_bonus(0), 0);
    }

    #[test]
    fn test_referral_bonus_cap() {
        assert_eq!(referral_bonus(20_000_000_000), REFERRAL_BONUS_CAP);
    }
}
