//! Error types for the pay scale engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading salary data and
//! querying compensation figures.

use thiserror::Error;

use crate::models::{Grade, GradeStep, SalaryFigures};

/// The main error type for the pay scale engine.
///
/// # Example
///
/// ```
/// use pay_scale_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scale.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scale.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Salary figures were already set for this year and grade+step.
    ///
    /// Raised when the ledger is populated twice for the same key, which
    /// points at a data-loading bug upstream.
    #[error("Salary for {grade_step} in {year} already set (is {existing})")]
    DuplicateEntry {
        /// The year of the rejected entry.
        year: i32,
        /// The grade and step of the rejected entry.
        grade_step: GradeStep,
        /// The figures that were stored first and remain in place.
        existing: SalaryFigures,
    },

    /// No salary figures were loaded for this year and grade+step.
    #[error("No salary set for {grade_step} in {year}")]
    MissingEntry {
        /// The requested year.
        year: i32,
        /// The requested grade and step.
        grade_step: GradeStep,
    },

    /// A step ordinal outside the pay scale.
    #[error("Invalid step {value}: steps range from 1 to 6")]
    InvalidStep {
        /// The offending ordinal.
        value: u8,
    },

    /// A grade identifier that could not be parsed.
    #[error("Invalid grade '{value}'")]
    InvalidGrade {
        /// The offending identifier.
        value: String,
    },

    /// Salary data references a grade the pay scale does not list.
    #[error("Grade {grade} is not part of the pay scale")]
    GradeNotInScale {
        /// The unknown grade.
        grade: Grade,
    },

    /// A salary table declares a different year than its file name.
    #[error("Salary table '{path}' declares year {declared_year} but is named for {file_year}")]
    TableYearMismatch {
        /// The path to the salary table.
        path: String,
        /// The year taken from the file name.
        file_year: i32,
        /// The year written inside the file.
        declared_year: i32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
