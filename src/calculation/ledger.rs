//! The compensation ledger: published salary figures per year and grade+step.
//!
//! The ledger is filled once during setup and only read afterwards. Each
//! (year, grade+step) key can be set exactly once.

use std::collections::{BTreeSet, HashMap};
use std::collections::hash_map::Entry;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{GradeStep, SalaryFigures};

use super::rounding::round_money;

/// Returns the employer cost surcharge rate applied on top of gross salary.
///
/// The rate is 0.30 (30%).
pub fn employer_surcharge_rate() -> Decimal {
    Decimal::new(30, 2)
}

/// Returns the factor gross salary is multiplied by to obtain employer cost
/// (1 + [`employer_surcharge_rate`]).
pub fn employer_surcharge_factor() -> Decimal {
    Decimal::ONE + employer_surcharge_rate()
}

/// Salary figures keyed by year and grade+step.
///
/// # Example
///
/// ```
/// use pay_scale_engine::calculation::CompensationLedger;
/// use pay_scale_engine::models::{Grade, GradeStep, SalaryFigures, Step};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let e10_2 = GradeStep::new(Grade::new(10), Step::Two);
/// let mut ledger = CompensationLedger::new();
/// ledger.set(
///     2019,
///     e10_2,
///     SalaryFigures::new(Decimal::from_str("3000.00")?, Decimal::from_str("1050.00")?),
/// )?;
///
/// assert_eq!(ledger.monthly_total(2019, e10_2)?, Decimal::from_str("3900.00")?);
/// assert_eq!(ledger.annual_bonus(2019, e10_2)?, Decimal::from_str("1050.00")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompensationLedger {
    salaries: HashMap<(i32, GradeStep), SalaryFigures>,
}

impl CompensationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the salary figures for `grade_step` in `year`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if figures are already stored for this year and
    /// grade+step. The stored figures are left untouched.
    pub fn set(&mut self, year: i32, grade_step: GradeStep, figures: SalaryFigures) -> EngineResult<()> {
        match self.salaries.entry((year, grade_step)) {
            Entry::Occupied(existing) => {
                let existing = *existing.get();
                warn!(year, grade_step = %grade_step, existing = %existing, "Rejected duplicate salary entry");
                Err(EngineError::DuplicateEntry {
                    year,
                    grade_step,
                    existing,
                })
            }
            Entry::Vacant(slot) => {
                debug!(year, grade_step = %grade_step, figures = %figures, "Salary entry set");
                slot.insert(figures);
                Ok(())
            }
        }
    }

    /// Returns the stored figures for `grade_step` in `year`, if any.
    pub fn figures(&self, year: i32, grade_step: GradeStep) -> Option<&SalaryFigures> {
        self.salaries.get(&(year, grade_step))
    }

    /// Returns the monthly employer cost: gross salary times the surcharge
    /// factor, rounded half-up to cents. The annual bonus is not included.
    ///
    /// # Errors
    ///
    /// Returns `MissingEntry` if no figures are stored for this year and grade+step.
    pub fn monthly_total(&self, year: i32, grade_step: GradeStep) -> EngineResult<Decimal> {
        let figures = self.lookup(year, grade_step)?;
        Ok(round_money(figures.gross() * employer_surcharge_factor()))
    }

    /// Returns the annual bonus exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns `MissingEntry` if no figures are stored for this year and grade+step.
    pub fn annual_bonus(&self, year: i32, grade_step: GradeStep) -> EngineResult<Decimal> {
        Ok(self.lookup(year, grade_step)?.bonus())
    }

    /// Returns true if figures are stored for `grade_step` in `year`.
    pub fn contains(&self, year: i32, grade_step: GradeStep) -> bool {
        self.salaries.contains_key(&(year, grade_step))
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.salaries.len()
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.salaries.is_empty()
    }

    /// Returns the years with at least one entry, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.salaries
            .keys()
            .map(|(year, _)| *year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn lookup(&self, year: i32, grade_step: GradeStep) -> EngineResult<&SalaryFigures> {
        self.figures(year, grade_step).ok_or_else(|| {
            warn!(year, grade_step = %grade_step, "No salary entry for query");
            EngineError::MissingEntry { year, grade_step }
        })
    }
}
