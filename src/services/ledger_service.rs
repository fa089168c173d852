use crate::config::CreationPolicy;
use crate::error::{AppError, AppResult};
use crate::models::{PurchaseReceipt, UserAccount};
use crate::repositories::AccountRepository;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// Service owning all reward-bearing mutations: verification,
/// purchase recording and referral registration.
pub struct LedgerService {
    accounts: Arc<AccountRepository>,
    creation_policy: CreationPolicy,
}

impl LedgerService {
    pub fn new(accounts: Arc<AccountRepository>, creation_policy: CreationPolicy) -> Self {
        Self {
            accounts,
            creation_policy,
        }
    }

    /// Link a wallet to its chat identity, creating the account when new.
    ///
    /// Idempotent for repeat calls with the same handle; a wallet cannot
    /// be claimed by two chat identities.
    pub async fn verify(
        &self,
        wallet: &str,
        chat_handle: &str,
        now: DateTime<Utc>,
    ) -> AppResult<UserAccount> {
        info!("Verifying wallet: wallet={}, handle={}", wallet, chat_handle);

        let account = self.accounts.upsert_verification(wallet, chat_handle, now).await?;
        Ok(account)
    }

    /// Record a self-reported purchase and settle any rewards it earns.
    ///
    /// Amounts are trusted input from the transport layer; only
    /// positivity is enforced here. The streak transition, milestone
    /// lookups and the referral bonus all commit atomically.
    pub async fn record_purchase(
        &self,
        wallet: &str,
        amount: i64,
        now: DateTime<Utc>,
    ) -> AppResult<PurchaseReceipt> {
        if amount <= 0 {
            return Err(AppError::InvalidAmount(amount));
        }

        let auto_create = self.creation_policy == CreationPolicy::CreateOnPurchase;
        let receipt = self
            .accounts
            .apply_purchase(wallet, amount, now, auto_create)
            .await?;

        info!(
            "Recorded purchase: wallet={}, amount={}, streak={}, reward={}",
            wallet,
            amount,
            receipt.streak_days,
            receipt.reward()
        );
        if let Some(payout) = &receipt.referral_payout {
            info!(
                "Referral bonus: referrer={}, bonus={}",
                payout.referrer, payout.bonus
            );
        }

        Ok(receipt)
    }

    /// Register `referrer` as the referrer of `wallet`.
    ///
    /// Called once at account-creation time when a referrer argument was
    /// supplied. Returns whether the link was made: an unknown referrer
    /// is silently ignored. No reward is paid here; the referrer earns
    /// its cut later, per milestone.
    pub async fn register_referral(&self, wallet: &str, referrer: &str) -> AppResult<bool> {
        if wallet == referrer {
            return Err(AppError::Conflict(format!(
                "wallet {} cannot refer itself",
                wallet
            )));
        }

        let linked = self.accounts.link_referral(wallet, referrer).await?;
        if linked {
            info!("Referral registered: wallet={}, referrer={}", wallet, referrer);
        } else {
            warn!(
                "Referral ignored: referrer {} is not a registered wallet",
                referrer
            );
        }
        Ok(linked)
    }
}
