//! Pure reward-accrual math: streak transitions and milestone payouts.
//!
//! Nothing in this module touches storage or performs I/O; the
//! repository applies these functions inside its write transaction.

pub mod rewards;
pub mod streak;

pub use rewards::{referral_bonus, streak_reward, volume_rewards, REFERRAL_BONUS_CAP};
pub use streak::StreakStep;
