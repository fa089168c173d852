use chrono::{DateTime, Duration, TimeZone, Utc};
use mynala_ledger::config::CreationPolicy;
use mynala_ledger::models::PurchaseReceipt;
use mynala_ledger::AppState;

/// Fixed base instant so streak arithmetic is deterministic.
/// `day(n)` is noon UTC, n days after the base date.
pub fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + Duration::days(offset)
}

/// Ledger requiring verification before purchases (the primary policy)
pub fn strict_ledger() -> AppState {
    AppState::new(CreationPolicy::RequireVerification)
}

/// Ledger that auto-creates accounts on first purchase
pub fn relaxed_ledger() -> AppState {
    AppState::new(CreationPolicy::CreateOnPurchase)
}

/// Verify a wallet under a handle derived from its name
pub async fn verified_wallet(state: &AppState, wallet: &str) {
    state
        .ledger
        .verify(wallet, &format!("@{}", wallet), day(0))
        .await
        .expect("Failed to verify wallet");
}

/// Record one 10-token purchase per day for `days` consecutive days
/// starting at `day(start)`. Returns the receipt of the final day.
pub async fn run_streak(state: &AppState, wallet: &str, start: i64, days: i64) -> PurchaseReceipt {
    let mut last = None;
    for offset in 0..days {
        let receipt = state
            .ledger
            .record_purchase(wallet, 10, day(start + offset))
            .await
            .expect("Failed to record purchase");
        last = Some(receipt);
    }
    last.expect("Streak must cover at least one day")
}
