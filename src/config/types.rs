//! Configuration types for pay scale data.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Grade, GradeStep, PayScale, SalaryFigures, Step};

/// Metadata about the pay scale.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleMetadata {
    /// Short identifier of the scale (e.g., "TV-L").
    pub code: String,
    /// The human-readable name of the scale.
    pub name: String,
    /// Where the published tables come from.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Scale configuration file structure (`scale.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfig {
    /// Scale metadata.
    pub scale: ScaleMetadata,
    /// The grades for which salary tables are published.
    pub grades: Vec<Grade>,
}

impl ScaleConfig {
    /// Builds the grade/step catalog from the configured grades.
    pub fn pay_scale(&self) -> PayScale {
        PayScale::new(self.grades.iter().copied())
    }
}

/// One published salary for a grade and step.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryEntry {
    /// The grade.
    pub grade: Grade,
    /// The step within the grade.
    pub step: Step,
    /// Gross monthly base salary.
    pub gross: Decimal,
    /// Annual bonus.
    pub bonus: Decimal,
}

impl SalaryEntry {
    /// Returns the grade+step this entry applies to.
    pub fn grade_step(&self) -> GradeStep {
        GradeStep::new(self.grade, self.step)
    }

    /// Returns the entry's amounts as cent-precise salary figures.
    pub fn figures(&self) -> SalaryFigures {
        SalaryFigures::new(self.gross, self.bonus)
    }
}

/// Salary table for one year (`salaries/<year>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryTable {
    /// The calendar year the table applies to.
    pub year: i32,
    /// The published salaries.
    pub entries: Vec<SalaryEntry>,
}
