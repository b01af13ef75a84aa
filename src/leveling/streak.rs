use chrono::NaiveDate;

/// A first practice, a gap, or a last date in the future starts over at 1.
pub fn next_streak(current: u32, last_practice: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_practice else {
        return 1;
    };

    if last == today {
        current
    } else if today.pred_opt() == Some(last) {
        current.saturating_add(1)
    } else {
        1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    #[test]
    fn first_practice_starts_at_one() {
        assert_eq!(next_streak(0, None, day(10)), 1);
        assert_eq!(next_streak(7, None, day(10)), 1);
    }

    #[test]
    fn same_day_keeps_streak() {
        assert_eq!(next_streak(4, Some(day(10)), day(10)), 4);
        assert_eq!(next_streak(0, Some(day(10)), day(10)), 0);
    }

    #[test]
    fn consecutive_day_extends() {
        assert_eq!(next_streak(4, Some(day(9)), day(10)), 5);
        // across a month boundary
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(next_streak(2, Some(jan31), day(1)), 3);
    }

    #[test]
    fn gaps_and_future_dates_reset() {
        assert_eq!(next_streak(4, Some(day(8)), day(10)), 1);
        assert_eq!(next_streak(4, Some(day(1)), day(28)), 1);
        assert_eq!(next_streak(4, Some(day(11)), day(10)), 1);
    }
}
