use serde::Serialize;

use super::{Goals, LogEntry};

/// Calorie and macro sums across all log entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    /// Total calories, in kcal.
    pub calories: u32,
    /// Total protein, in grams.
    pub protein: f64,
    /// Total carbohydrates, in grams.
    pub carbs: f64,
    /// Total fat, in grams.
    pub fat: f64,
}

impl Totals {
    /// Sums the stored values of every entry in the log.
    ///
    /// Returns `None` for an empty log, so callers can distinguish "nothing
    /// logged" from a log whose entries happen to sum to zero. Entries are
    /// summed as stored; rounding applied when each entry was created is
    /// deliberately not revisited.
    #[must_use]
    pub fn aggregate(log: &[LogEntry]) -> Option<Self> {
        if log.is_empty() {
            return None;
        }
        Some(log.iter().fold(
            Self {
                calories: 0,
                protein: 0.0,
                carbs: 0.0,
                fat: 0.0,
            },
            |acc, entry| Self {
                calories: acc.calories + entry.calories,
                protein: acc.protein + entry.protein,
                carbs: acc.carbs + entry.carbs,
                fat: acc.fat + entry.fat,
            },
        ))
    }
}

/// Progress towards a goal as a whole percentage, clamped to `0..=100`.
///
/// A goal of zero (or less) reports 0% rather than dividing by zero, and
/// progress never reads above 100% even when the goal is exceeded; the
/// overshoot is reported separately as a [`CalorieBalance::Surplus`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(current: f64, goal: f64) -> u8 {
    if goal <= 0.0 {
        return 0;
    }
    (current / goal * 100.0).floor().clamp(0.0, 100.0) as u8
}

/// Where the day's calories stand relative to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieBalance {
    /// Calories remaining below the goal.
    Deficit(u32),
    /// Calories at or over the goal. Meeting the goal exactly is a surplus
    /// of zero.
    Surplus(u32),
}

impl CalorieBalance {
    /// Compares logged calories against the goal's calorie target.
    #[must_use]
    pub const fn between(totals: &Totals, goals: &Goals) -> Self {
        if goals.calories() > totals.calories {
            Self::Deficit(goals.calories() - totals.calories)
        } else {
            Self::Surplus(totals.calories - goals.calories())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;

    fn entry(calories: u32, protein: f64, carbs: f64, fat: f64) -> LogEntry {
        LogEntry {
            name: "Test Food".to_string(),
            portion: 100.0,
            calories,
            protein,
            carbs,
            fat,
        }
    }

    #[test]
    fn aggregate_empty_log_is_none() {
        assert_eq!(Totals::aggregate(&[]), None);
    }

    #[test]
    fn aggregate_zero_entries_is_zero_totals_not_none() {
        let totals = Totals::aggregate(&[entry(0, 0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(totals.calories, 0);
        assert!(totals.protein.abs() < 1e-9);
    }

    #[test]
    fn aggregate_sums_stored_values() {
        let log = vec![entry(235, 46.5, 0.0, 5.4), entry(136, 3.2, 28.3, 1.1)];
        let totals = Totals::aggregate(&log).unwrap();
        assert_eq!(totals.calories, 371);
        assert!((totals.protein - 49.7).abs() < 1e-9);
        assert!((totals.carbs - 28.3).abs() < 1e-9);
        assert!((totals.fat - 6.5).abs() < 1e-9);
    }

    #[test]
    fn progress_with_zero_goal_is_zero() {
        assert_eq!(progress_percent(50.0, 0.0), 0);
        assert_eq!(progress_percent(50.0, -10.0), 0);
    }

    #[test]
    fn progress_is_clamped_to_100() {
        assert_eq!(progress_percent(150.0, 100.0), 100);
    }

    #[test]
    fn progress_is_floored() {
        assert_eq!(progress_percent(50.0, 100.0), 50);
        assert_eq!(progress_percent(2.0, 3.0), 66);
    }

    #[test]
    fn balance_below_goal_is_a_deficit() {
        let totals = Totals::aggregate(&[entry(2000, 0.0, 0.0, 0.0)]).unwrap();
        let goals = Goals::plan(Mode::Maintain, 2500.0).unwrap();
        assert_eq!(
            CalorieBalance::between(&totals, &goals),
            CalorieBalance::Deficit(500)
        );
    }

    #[test]
    fn balance_at_exact_goal_is_surplus_zero() {
        let totals = Totals::aggregate(&[entry(2500, 0.0, 0.0, 0.0)]).unwrap();
        let goals = Goals::plan(Mode::Maintain, 2500.0).unwrap();
        assert_eq!(
            CalorieBalance::between(&totals, &goals),
            CalorieBalance::Surplus(0)
        );
    }

    #[test]
    fn balance_over_goal_is_a_surplus() {
        let totals = Totals::aggregate(&[entry(2800, 0.0, 0.0, 0.0)]).unwrap();
        let goals = Goals::plan(Mode::Maintain, 2500.0).unwrap();
        assert_eq!(
            CalorieBalance::between(&totals, &goals),
            CalorieBalance::Surplus(300)
        );
    }
}
