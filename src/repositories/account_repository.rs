//! Repository for account state and reward transactions.
//!
//! The whole account book sits behind one `RwLock`: every mutation runs
//! under the write guard, so a purchase and its referral side effect
//! commit as a single unit spanning up to two accounts. Reads take the
//! read guard and return owned snapshots, never a half-updated row.

use crate::accrual::{rewards, streak};
use crate::error::{AppError, AppResult};
use crate::models::{Leaderboard, LeaderboardEntry, PurchaseReceipt, ReferralPayout, UserAccount};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Account storage keyed by wallet. Creation order is retained for
/// stable leaderboard tie-breaks (first created wins).
#[derive(Default)]
struct AccountBook {
    accounts: HashMap<String, UserAccount>,
    creation_order: Vec<String>,
}

impl AccountBook {
    fn insert(&mut self, account: UserAccount) {
        self.creation_order.push(account.wallet.clone());
        self.accounts.insert(account.wallet.clone(), account);
    }
}

pub struct AccountRepository {
    book: RwLock<AccountBook>,
}

impl Default for AccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRepository {
    /// Create an empty AccountRepository
    pub fn new() -> Self {
        Self {
            book: RwLock::new(AccountBook::default()),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Find an account by wallet address
    pub async fn find_by_wallet(&self, wallet: &str) -> Option<UserAccount> {
        self.book.read().await.accounts.get(wallet).cloned()
    }

    /// Number of registered accounts
    pub async fn count(&self) -> usize {
        self.book.read().await.accounts.len()
    }

    /// Top-n verified accounts by volume, rewards and referrals, each
    /// metric ranked independently. The sort is stable over creation
    /// order, so ties go to the earlier account.
    pub async fn leaderboard(&self, n: usize) -> Leaderboard {
        let book = self.book.read().await;
        let eligible: Vec<&UserAccount> = book
            .creation_order
            .iter()
            .filter_map(|wallet| book.accounts.get(wallet))
            .filter(|account| account.verified)
            .collect();

        Leaderboard {
            by_volume: top_by(&eligible, n, |a| a.total_volume),
            by_rewards: top_by(&eligible, n, |a| a.total_rewards),
            by_referrals: top_by(&eligible, n, |a| i64::from(a.referral_count)),
        }
    }

    // =========================================================================
    // Writes (each call commits fully or leaves the book untouched)
    // =========================================================================

    /// Insert a new account. Fails if the wallet is already registered.
    pub async fn insert(&self, account: UserAccount) -> AppResult<UserAccount> {
        let mut book = self.book.write().await;
        if book.accounts.contains_key(&account.wallet) {
            return Err(AppError::DuplicateWallet(account.wallet.clone()));
        }
        book.insert(account.clone());
        Ok(account)
    }

    /// Link a wallet to a chat handle, creating the account when new.
    ///
    /// Idempotent for a repeat call with the same handle; a different
    /// handle on an existing wallet is a conflict. An account created
    /// earlier without a handle (auto-created on purchase) gets the
    /// handle linked and becomes verified.
    pub async fn upsert_verification(
        &self,
        wallet: &str,
        chat_handle: &str,
        now: DateTime<Utc>,
    ) -> AppResult<UserAccount> {
        let mut book = self.book.write().await;

        if let Some(account) = book.accounts.get_mut(wallet) {
            return match account.chat_handle.as_deref() {
                Some(existing) if existing == chat_handle => Ok(account.clone()),
                Some(_) => Err(AppError::Conflict(format!(
                    "wallet {} is already linked to another chat handle",
                    wallet
                ))),
                None => {
                    account.chat_handle = Some(chat_handle.to_string());
                    account.verified = true;
                    Ok(account.clone())
                }
            };
        }

        let account = UserAccount::new(
            wallet.to_string(),
            Some(chat_handle.to_string()),
            true,
            now.naive_utc(),
        );
        book.insert(account.clone());
        Ok(account)
    }

    /// Record a purchase: streak transition, volume accumulation,
    /// milestone rewards and the referral bonus, in one transaction.
    ///
    /// With `auto_create` set, an unknown wallet is created on the spot
    /// (unverified, no handle) and the verified gate is skipped; this is
    /// the relaxed creation policy. Without it, unknown wallets fail
    /// with `NotFound` and unverified accounts with `NotVerified`.
    pub async fn apply_purchase(
        &self,
        wallet: &str,
        amount: i64,
        now: DateTime<Utc>,
        auto_create: bool,
    ) -> AppResult<PurchaseReceipt> {
        let today = now.date_naive();
        let mut book = self.book.write().await;

        if !book.accounts.contains_key(wallet) {
            if !auto_create {
                return Err(AppError::NotFound(wallet.to_string()));
            }
            let account = UserAccount::new(wallet.to_string(), None, false, now.naive_utc());
            book.insert(account);
        }

        let account = book
            .accounts
            .get_mut(wallet)
            .ok_or_else(|| AppError::NotFound(wallet.to_string()))?;

        if !auto_create && !account.verified {
            return Err(AppError::NotVerified(wallet.to_string()));
        }

        let (streak_days, _step) = streak::advance(account.streak_days, account.last_purchase, today);
        let volume_before = account.total_volume;

        account.streak_days = streak_days;
        account.last_purchase = Some(today);
        account.total_volume = volume_before + amount;

        let streak_reward = rewards::streak_reward(streak_days);
        let volume_reward = rewards::volume_rewards(volume_before, account.total_volume);
        account.total_rewards += streak_reward + volume_reward;

        let total_volume = account.total_volume;
        let total_rewards = account.total_rewards;
        let referred_by = account.referred_by.clone();

        // Referral bonus rides on the streak reward only; the referrer
        // row is the second account touched by this write guard.
        let mut referral_payout = None;
        if streak_reward > 0 {
            if let Some(referrer) = referred_by {
                if let Some(row) = book.accounts.get_mut(&referrer) {
                    let bonus = rewards::referral_bonus(streak_reward);
                    row.total_rewards += bonus;
                    referral_payout = Some(ReferralPayout { referrer, bonus });
                }
            }
        }

        Ok(PurchaseReceipt {
            wallet: wallet.to_string(),
            streak_days,
            total_volume,
            streak_reward,
            volume_reward,
            total_rewards,
            referral_payout,
        })
    }

    /// Bind `wallet`'s referrer, once.
    ///
    /// Returns `Ok(true)` when the link was made, `Ok(false)` when the
    /// referrer wallet is unknown (the link is silently dropped, no
    /// count is bumped). A referrer that is already set cannot be
    /// rebound.
    pub async fn link_referral(&self, wallet: &str, referrer: &str) -> AppResult<bool> {
        let mut book = self.book.write().await;

        let referrer_exists = book.accounts.contains_key(referrer);

        let account = book
            .accounts
            .get_mut(wallet)
            .ok_or_else(|| AppError::NotFound(wallet.to_string()))?;

        if account.referred_by.is_some() {
            return Err(AppError::Conflict(format!(
                "wallet {} already has a referrer",
                wallet
            )));
        }

        if !referrer_exists {
            return Ok(false);
        }

        account.referred_by = Some(referrer.to_string());

        let row = book
            .accounts
            .get_mut(referrer)
            .ok_or_else(|| AppError::NotFound(referrer.to_string()))?;
        row.referral_count += 1;

        Ok(true)
    }
}

/// Stable descending sort by `key`, truncated to `n` entries
fn top_by(
    accounts: &[&UserAccount],
    n: usize,
    key: impl Fn(&UserAccount) -> i64,
) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&UserAccount> = accounts.to_vec();
    ranked.sort_by_key(|account| std::cmp::Reverse(key(account)));
    ranked
        .into_iter()
        .take(n)
        .map(|account| LeaderboardEntry {
            wallet: account.wallet.clone(),
            value: key(account),
        })
        .collect()
}
