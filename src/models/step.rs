//! Pay scale steps ("Stufen") and their advancement rules.
//!
//! Every grade shares the same six steps. An employee climbs one step after
//! the current step's interval has elapsed; the interval in years equals the
//! step's ordinal, so step 1 lasts one year, step 2 two years and so on.

use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A seniority step within a grade.
///
/// Steps are totally ordered by their ordinal. The last step, [`Step::Six`],
/// is its own successor.
///
/// # Example
///
/// ```
/// use pay_scale_engine::models::Step;
///
/// assert_eq!(Step::Two.next(), Step::Three);
/// assert_eq!(Step::Six.next(), Step::Six);
/// assert_eq!(Step::Four.advancement_years(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    /// Step 1.
    One = 1,
    /// Step 2.
    Two = 2,
    /// Step 3.
    Three = 3,
    /// Step 4.
    Four = 4,
    /// Step 5.
    Five = 5,
    /// Step 6, the ceiling.
    Six = 6,
}

impl Step {
    /// All steps in ascending order.
    pub const ALL: [Step; 6] = [
        Step::One,
        Step::Two,
        Step::Three,
        Step::Four,
        Step::Five,
        Step::Six,
    ];

    /// The highest step of the scale.
    pub const MAX: Step = Step::Six;

    /// Returns the ordinal of this step (1 to 6).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the following step, or this step if it is already the maximum.
    pub fn next(self) -> Step {
        match self {
            Step::One => Step::Two,
            Step::Two => Step::Three,
            Step::Three => Step::Four,
            Step::Four => Step::Five,
            Step::Five | Step::Six => Step::Six,
        }
    }

    /// Returns true if this is the highest step.
    pub fn is_max(self) -> bool {
        self == Step::MAX
    }

    /// Returns the number of whole years spent in this step before advancing.
    pub fn advancement_years(self) -> u32 {
        u32::from(self.ordinal())
    }

    /// Returns the date on which the step after this one becomes due.
    ///
    /// The due date keeps month and day of `last_advancement` and moves the
    /// year forward by [`Step::advancement_years`]. An advancement from
    /// 29 February lands on 28 February when the target year has no leap day.
    /// Returns `None` if the date would fall outside the representable range.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_scale_engine::models::Step;
    /// use chrono::NaiveDate;
    ///
    /// let since = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// assert_eq!(
    ///     Step::Two.next_advancement(since),
    ///     NaiveDate::from_ymd_opt(2022, 1, 1)
    /// );
    /// ```
    pub fn next_advancement(self, last_advancement: NaiveDate) -> Option<NaiveDate> {
        last_advancement.checked_add_months(Months::new(12 * self.advancement_years()))
    }
}

impl TryFrom<u8> for Step {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Step::ALL
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or(EngineError::InvalidStep { value })
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.ordinal()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stufe {}", self.ordinal())
    }
}
