//! Grade and step combinations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Grade, Step};

/// A pay grade together with a step within it, e.g. `E 13 / Stufe 3`.
///
/// This is the key under which salary figures are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradeStep {
    /// The pay grade.
    pub grade: Grade,
    /// The step within the grade.
    pub step: Step,
}

impl GradeStep {
    /// Creates a new grade+step pair.
    pub const fn new(grade: Grade, step: Step) -> Self {
        Self { grade, step }
    }

    /// Returns the same grade with the following step (saturating at the maximum).
    pub fn advanced(self) -> Self {
        Self::new(self.grade, self.step.next())
    }
}

impl fmt::Display for GradeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.grade, self.step)
    }
}
