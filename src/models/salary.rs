//! Monthly salary figures as published in a pay table.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_money;

/// Gross monthly base salary (without employer surcharge) and the annual
/// bonus ("Sonderzahlung") for one grade+step in one year.
///
/// Both amounts are held at cent precision.
///
/// # Example
///
/// ```
/// use pay_scale_engine::models::SalaryFigures;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let figures = SalaryFigures::new(
///     Decimal::from_str("3000.005").unwrap(),
///     Decimal::from_str("2100").unwrap(),
/// );
/// assert_eq!(figures.gross(), Decimal::from_str("3000.01").unwrap());
/// assert_eq!(figures.bonus().to_string(), "2100.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "UnroundedFigures")]
pub struct SalaryFigures {
    gross: Decimal,
    bonus: Decimal,
}

/// Amounts as read, before rounding to cents.
#[derive(Deserialize)]
struct UnroundedFigures {
    gross: Decimal,
    bonus: Decimal,
}

impl From<UnroundedFigures> for SalaryFigures {
    fn from(raw: UnroundedFigures) -> Self {
        SalaryFigures::new(raw.gross, raw.bonus)
    }
}

impl SalaryFigures {
    /// Creates salary figures, rounding both amounts half-up to cents.
    pub fn new(gross: Decimal, bonus: Decimal) -> Self {
        Self {
            gross: round_money(gross),
            bonus: round_money(bonus),
        }
    }

    /// Returns the gross monthly base salary.
    pub fn gross(&self) -> Decimal {
        self.gross
    }

    /// Returns the annual bonus, paid once a year.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }
}

impl fmt::Display for SalaryFigures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gross {}, bonus {}", self.gross, self.bonus)
    }
}
