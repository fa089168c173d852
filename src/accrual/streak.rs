use chrono::NaiveDate;

/// How a purchase moved the consecutive-day counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStep {
    /// First purchase ever recorded for the account
    Started,
    /// Purchase on the day after the previous one
    Extended,
    /// Another purchase on the same calendar day
    SameDay,
    /// Gap of more than one day; the streak restarts at this purchase
    Broken,
}

/// Advance a buy streak to `today`.
///
/// Streaks are counted in UTC calendar days, so only the date of the
/// previous purchase matters. A stored date that lies in the future
/// relative to `today` is a data anomaly and is handled like a broken
/// streak rather than rejected.
///
/// Returns the new streak length (never 0) and the step classification.
pub fn advance(
    streak_days: u32,
    last_purchase: Option<NaiveDate>,
    today: NaiveDate,
) -> (u32, StreakStep) {
    let last = match last_purchase {
        Some(date) => date,
        None => return (1, StreakStep::Started),
    };

    match (today - last).num_days() {
        0 => (streak_days, StreakStep::SameDay),
        1 => (streak_days + 1, StreakStep::Extended),
        // gap > 1, or a future-dated row (negative gap)
        _ => (1, StreakStep::Broken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_first_purchase_starts_streak() {
        let (days, step) = advance(0, None, date(1));
        assert_eq!(days, 1);
        assert_eq!(step, StreakStep::Started);
    }

    #[test]
    fn test_next_day_extends_streak() {
        let (days, step) = advance(4, Some(date(9)), date(10));
        assert_eq!(days, 5);
        assert_eq!(step, StreakStep::Extended);
    }

    #[test]
    fn test_same_day_leaves_streak_unchanged() {
        let (days, step) = advance(4, Some(date(10)), date(10));
        assert_eq!(days, 4);
        assert_eq!(step, StreakStep::SameDay);
    }

    #[test]
    fn test_gap_resets_streak_to_one() {
        let (days, step) = advance(6, Some(date(5)), date(9));
        assert_eq!(days, 1);
        assert_eq!(step, StreakStep::Broken);
    }

    #[test]
    fn test_future_dated_row_resets_streak() {
        // Last purchase recorded after "today" should not panic or
        // extend; it falls back to a restart.
        let (days, step) = advance(6, Some(date(20)), date(10));
        assert_eq!(days, 1);
        assert_eq!(step, StreakStep::Broken);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let last = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let (days, step) = advance(2, Some(last), today);
        assert_eq!(days, 3);
        assert_eq!(step, StreakStep::Extended);
    }
}
