use crate::error::{AppError, AppResult};
use crate::models::{AccountStatus, ClaimableRewards, Leaderboard, ReferralSummary};
use crate::repositories::AccountRepository;
use std::sync::Arc;

/// Read-only projections over ledger state for status, claim, referral
/// and leaderboard display. Queries run against a consistent snapshot
/// and never observe an in-flight write.
pub struct QueryService {
    accounts: Arc<AccountRepository>,
}

impl QueryService {
    pub fn new(accounts: Arc<AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Status summary for one wallet
    pub async fn status(&self, wallet: &str) -> AppResult<AccountStatus> {
        let account = self
            .accounts
            .find_by_wallet(wallet)
            .await
            .ok_or_else(|| AppError::NotFound(wallet.to_string()))?;
        Ok(AccountStatus::from(&account))
    }

    /// Accrued rewards for one wallet. Informational only; claiming a
    /// transfer is not modeled by the ledger.
    pub async fn claimable(&self, wallet: &str) -> AppResult<ClaimableRewards> {
        let account = self
            .accounts
            .find_by_wallet(wallet)
            .await
            .ok_or_else(|| AppError::NotFound(wallet.to_string()))?;
        Ok(ClaimableRewards {
            wallet: account.wallet,
            total_rewards: account.total_rewards,
        })
    }

    /// Referral linkage for one wallet
    pub async fn referrals(&self, wallet: &str) -> AppResult<ReferralSummary> {
        let account = self
            .accounts
            .find_by_wallet(wallet)
            .await
            .ok_or_else(|| AppError::NotFound(wallet.to_string()))?;
        Ok(ReferralSummary {
            wallet: account.wallet,
            referral_count: account.referral_count,
            referred_by: account.referred_by,
        })
    }

    /// Top-n verified accounts per metric
    pub async fn leaderboard(&self, n: usize) -> Leaderboard {
        self.accounts.leaderboard(n).await
    }
}
