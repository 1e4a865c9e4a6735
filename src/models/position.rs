//! Positions and automatic step advancement.
//!
//! A [`Position`] records that a grade+step has applied since a given date.
//! Projecting a position to a later date applies every advancement that has
//! become due in between, one step at a time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GradeStep, Step};

/// A grade+step assignment together with the date it became effective.
///
/// Positions are values: advancing produces a new position, the original is
/// never modified.
///
/// # Example
///
/// ```
/// use pay_scale_engine::models::{Grade, GradeStep, Position, Step};
/// use chrono::NaiveDate;
///
/// let hired = Position::new(
///     GradeStep::new(Grade::new(13), Step::One),
///     NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
/// );
///
/// // One year in step 1, then two years in step 2.
/// let later = hired.project_to(NaiveDate::from_ymd_opt(2022, 6, 30).unwrap());
/// assert_eq!(later.grade_step.step, Step::Three);
/// assert_eq!(later.since, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// The grade and step held.
    pub grade_step: GradeStep,
    /// The date since which this grade+step applies.
    pub since: NaiveDate,
}

/// A single due date passed while projecting a position.
///
/// Below the maximum step `to` is the step after `from`. Once the maximum is
/// reached the step stays put and only the effective date moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advancement {
    /// The date on which the advancement takes effect.
    pub effective: NaiveDate,
    /// The step held before the advancement.
    pub from: Step,
    /// The step held from `effective` on.
    pub to: Step,
}

impl Position {
    /// Creates a position holding `grade_step` since `since`.
    pub fn new(grade_step: GradeStep, since: NaiveDate) -> Self {
        Self { grade_step, since }
    }

    /// Returns the date on which the next step becomes due, or `None` if this
    /// position already holds the maximum step.
    pub fn next_advancement(&self) -> Option<NaiveDate> {
        let step = self.grade_step.step;
        if step.is_max() {
            None
        } else {
            step.next_advancement(self.since)
        }
    }

    /// Returns every due date passed on the way to `date`, oldest first.
    ///
    /// The last entry, if any, matches the result of [`Position::project_to`].
    /// A position starting at the maximum step has no advancements.
    pub fn advancements_until(&self, date: NaiveDate) -> Vec<Advancement> {
        let mut history = Vec::new();
        if self.grade_step.step.is_max() {
            return history;
        }

        let mut step = self.grade_step.step;
        let mut due = step.next_advancement(self.since);
        while let Some(effective) = due.filter(|d| *d <= date) {
            let next = step.next();
            history.push(Advancement {
                effective,
                from: step,
                to: next,
            });
            step = next;
            due = step.next_advancement(effective);
        }

        history
    }

    /// Returns the position in effect on `date`.
    ///
    /// Starting from [`Position::since`], each due date on or before `date` is
    /// passed in turn: the step moves to its successor and the next due date
    /// is counted from the one just passed. At the maximum step the step no
    /// longer changes but due dates keep following at its interval.
    ///
    /// If the step ends where it started (no advancement was due, `date`
    /// precedes `since`, or the position already held the maximum step), the
    /// result equals `self`. Otherwise it carries the final step and the last
    /// due date passed.
    pub fn project_to(&self, date: NaiveDate) -> Position {
        if self.grade_step.step.is_max() {
            return *self;
        }

        let mut grade_step = self.grade_step;
        let mut since = self.since;
        let mut due = grade_step.step.next_advancement(since);

        while let Some(next_due) = due.filter(|d| *d <= date) {
            since = next_due;
            grade_step = grade_step.advanced();
            due = grade_step.step.next_advancement(since);
            debug!(
                grade_step = %grade_step,
                effective = %since,
                "Applying step advancement"
            );
        }

        if grade_step == self.grade_step {
            *self
        } else {
            Position::new(grade_step, since)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn position(step: Step, since: NaiveDate) -> Position {
        Position::new(GradeStep::new(Grade::new(13), step), since)
    }

    #[test]
    fn test_day_before_due_date_keeps_step() {
        let p = position(Step::Two, date(2020, 1, 1));
        assert_eq!(p.project_to(date(2021, 12, 31)), p);
    }

    #[test]
    fn test_due_date_advances_exactly_once() {
        let p = position(Step::Two, date(2020, 1, 1));
        let projected = p.project_to(date(2022, 1, 1));

        assert_eq!(projected.grade_step.step, Step::Three);
        assert_eq!(projected.grade_step.grade, Grade::new(13));
        assert_eq!(projected.since, date(2022, 1, 1));
    }

    #[test]
    fn test_target_before_since_returns_same_position() {
        let p = position(Step::One, date(2020, 5, 1));
        assert_eq!(p.project_to(date(2010, 1, 1)), p);
    }

    #[test]
    fn test_position_starting_at_max_step_is_unchanged() {
        let p = position(Step::Six, date(1990, 1, 1));
        assert_eq!(p.project_to(date(2090, 1, 1)), p);
        assert_eq!(p.next_advancement(), None);
        assert!(p.advancements_until(date(2090, 1, 1)).is_empty());
    }

    #[test]
    fn test_since_keeps_moving_in_six_year_intervals_after_reaching_max() {
        let p = position(Step::Five, date(2010, 1, 1));
        let projected = p.project_to(date(2030, 6, 1));

        // Step 6 from 2015, then due again in 2021 and 2027; 2033 is past the target.
        assert_eq!(projected.grade_step.step, Step::Six);
        assert_eq!(projected.since, date(2027, 1, 1));
    }

    #[test]
    fn test_due_date_at_max_step_is_inclusive() {
        let p = position(Step::Five, date(2010, 1, 1));
        assert_eq!(p.project_to(date(2020, 12, 31)).since, date(2015, 1, 1));
        assert_eq!(p.project_to(date(2021, 1, 1)).since, date(2021, 1, 1));
    }

    #[test]
    fn test_multi_step_jump_climbs_every_step_to_cap() {
        let p = position(Step::One, date(2000, 1, 1));
        let history = p.advancements_until(date(2100, 1, 1));

        let climb: Vec<(Step, Step)> = history.iter().take(5).map(|a| (a.from, a.to)).collect();
        assert_eq!(
            climb,
            vec![
                (Step::One, Step::Two),
                (Step::Two, Step::Three),
                (Step::Three, Step::Four),
                (Step::Four, Step::Five),
                (Step::Five, Step::Six),
            ]
        );
        // Step 6 is reached on 2015-01-01 (1 + 2 + 3 + 4 + 5 years after hire).
        assert_eq!(history[4].effective, date(2015, 1, 1));
        assert!(history[5..].iter().all(|a| a.from == Step::Six && a.to == Step::Six));

        let projected = p.project_to(date(2100, 1, 1));
        assert_eq!(projected.grade_step.step, Step::Six);
        assert_eq!(projected.since, date(2099, 1, 1));
        assert_eq!(history.last().map(|a| a.effective), Some(projected.since));
    }

    #[test]
    fn test_intervals_are_counted_from_previous_advancement() {
        let p = position(Step::One, date(2019, 7, 1));
        let effective: Vec<NaiveDate> = p
            .advancements_until(date(2026, 7, 1))
            .iter()
            .map(|a| a.effective)
            .collect();
        assert_eq!(
            effective,
            vec![date(2020, 7, 1), date(2022, 7, 1), date(2025, 7, 1)]
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let p = position(Step::One, date(2016, 4, 15));
        let target = date(2023, 9, 30);
        let once = p.project_to(target);
        assert_eq!(once.project_to(target), once);
    }

    #[test]
    fn test_next_advancement() {
        let p = position(Step::Three, date(2021, 10, 1));
        assert_eq!(p.next_advancement(), Some(date(2024, 10, 1)));
    }

    #[test]
    fn test_leap_day_hire() {
        let p = position(Step::One, date(2020, 2, 29));
        let projected = p.project_to(date(2021, 2, 28));
        assert_eq!(projected.grade_step.step, Step::Two);
        assert_eq!(projected.since, date(2021, 2, 28));
    }

    #[test]
    fn test_projection_stops_at_end_of_date_range() {
        let p = position(Step::Five, date(2010, 1, 1));
        let projected = p.project_to(NaiveDate::MAX);
        assert_eq!(projected.grade_step.step, Step::Six);
        assert!(Step::Six.next_advancement(projected.since).is_none());
    }

    #[test]
    fn test_position_round_trips_through_json() {
        let p = position(Step::Four, date(2018, 1, 1));
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"grade_step":{"grade":13,"step":4},"since":"2018-01-01"}"#
        );
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
