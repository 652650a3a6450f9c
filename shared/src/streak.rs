use chrono::NaiveDate;

/// Result of evaluating a check-in against the previous check-in date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakOutcome {
    pub streak: u32,
    pub is_comeback: bool,
}

/// Decides the streak length for a check-in happening on `today`.
///
/// The streak continues only when the previous check-in landed on the exact
/// calendar predecessor of `today`. Any other prior date resets the streak to
/// one and marks the check-in as a comeback. Same-day duplicates must be
/// rejected by the caller before this is invoked.
pub fn evaluate_streak(
    last_check_in: Option<NaiveDate>,
    today: NaiveDate,
    current_streak: u32,
) -> StreakOutcome {
    match last_check_in {
        None => StreakOutcome {
            streak: 1,
            is_comeback: false,
        },
        Some(date) if Some(date) == today.pred_opt() => StreakOutcome {
            streak: current_streak + 1,
            is_comeback: false,
        },
        Some(_) => StreakOutcome {
            streak: 1,
            is_comeback: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_check_in_starts_streak() {
        let outcome = evaluate_streak(None, day(2024, 6, 10), 0);
        assert_eq!(
            outcome,
            StreakOutcome {
                streak: 1,
                is_comeback: false
            }
        );
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let today = day(2024, 6, 10);
        let outcome = evaluate_streak(Some(day(2024, 6, 9)), today, 6);
        assert_eq!(
            outcome,
            StreakOutcome {
                streak: 7,
                is_comeback: false
            }
        );
    }

    #[test]
    fn gap_resets_streak_as_comeback() {
        let today = day(2024, 6, 10);
        let outcome = evaluate_streak(Some(day(2024, 6, 7)), today, 10);
        assert_eq!(
            outcome,
            StreakOutcome {
                streak: 1,
                is_comeback: true
            }
        );
    }

    #[test]
    fn future_date_resets_streak() {
        let today = day(2024, 6, 10);
        let outcome = evaluate_streak(Some(day(2024, 6, 12)), today, 4);
        assert!(outcome.is_comeback);
        assert_eq!(outcome.streak, 1);
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let outcome = evaluate_streak(Some(day(2024, 2, 29)), day(2024, 3, 1), 3);
        assert_eq!(
            outcome,
            StreakOutcome {
                streak: 4,
                is_comeback: false
            }
        );
    }

    #[test]
    fn year_boundary_counts_as_consecutive() {
        let last = day(2023, 12, 31);
        let today = last.checked_add_days(Days::new(1)).unwrap();
        let outcome = evaluate_streak(Some(last), today, 99);
        assert_eq!(outcome.streak, 100);
        assert!(!outcome.is_comeback);
    }
}
