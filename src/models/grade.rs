//! Pay grades ("Entgeltgruppen").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A pay grade identified by its numeric code, e.g. `E 13`.
///
/// Grades distinguish pay tracks; they carry no ordering meaning of their own.
///
/// # Example
///
/// ```
/// use pay_scale_engine::models::Grade;
///
/// let grade: Grade = "E13".parse().unwrap();
/// assert_eq!(grade, Grade::new(13));
/// assert_eq!(grade.to_string(), "E 13");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(u8);

impl Grade {
    /// Creates a grade from its numeric code.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the numeric code of this grade.
    pub fn code(self) -> u8 {
        self.0
    }
}

impl FromStr for Grade {
    type Err = EngineError;

    /// Accepts `13`, `E13`, `E 13` and `E_13`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['E', 'e'])
            .map(|rest| rest.trim_start_matches([' ', '_']))
            .unwrap_or(trimmed);

        digits
            .parse::<u8>()
            .map(Grade)
            .map_err(|_| EngineError::InvalidGrade {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E {}", self.0)
    }
}
