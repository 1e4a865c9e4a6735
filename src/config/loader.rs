//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay scale
//! data from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::CompensationLedger;
use crate::error::{EngineError, EngineResult};
use crate::models::PayScale;

use super::types::{SalaryTable, ScaleConfig, ScaleMetadata};

/// Loads a pay scale and its salary tables.
///
/// # Directory Structure
///
/// ```text
/// config/tv-l/
/// ├── scale.yaml          # Scale metadata and grades
/// └── salaries/
///     ├── 2019.yaml       # Salary table for one year
///     └── 2020.yaml
/// ```
///
/// Salary tables are read in file-name order and fed into the ledger entry by
/// entry, so a duplicate year+grade+step anywhere fails the load.
///
/// # Example
///
/// ```no_run
/// use pay_scale_engine::config::ConfigLoader;
/// use pay_scale_engine::models::{Grade, GradeStep, Step};
///
/// let loader = ConfigLoader::load("./config/tv-l")?;
/// let e13_1 = GradeStep::new(Grade::new(13), Step::One);
/// let cost = loader.ledger().monthly_total(2019, e13_1)?;
/// println!("Monthly cost: {} EUR", cost);
/// # Ok::<(), pay_scale_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: ScaleMetadata,
    pay_scale: PayScale,
    ledger: CompensationLedger,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `scale.yaml` or the `salaries` directory is missing, or holds no tables
    /// - Any file contains invalid YAML or an out-of-range step
    /// - A salary entry names a grade that `scale.yaml` does not list
    /// - A table named after a year (e.g. `2020.yaml`) declares another year
    /// - The same year, grade and step appear twice
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scale_config = Self::load_yaml::<ScaleConfig>(&path.join("scale.yaml"))?;
        let pay_scale = scale_config.pay_scale();

        let tables = Self::load_tables(&path.join("salaries"))?;
        let ledger = Self::populate_ledger(&pay_scale, &tables)?;

        info!(
            scale = %scale_config.scale.code,
            grades = pay_scale.grades().len(),
            years = tables.len(),
            entries = ledger.len(),
            "Loaded pay scale configuration"
        );

        Ok(Self {
            metadata: scale_config.scale,
            pay_scale,
            ledger,
        })
    }

    /// Feeds every salary table entry into a fresh ledger.
    pub fn populate_ledger(
        pay_scale: &PayScale,
        tables: &[SalaryTable],
    ) -> EngineResult<CompensationLedger> {
        let mut ledger = CompensationLedger::new();

        for table in tables {
            for entry in &table.entries {
                if !pay_scale.contains(entry.grade) {
                    return Err(EngineError::GradeNotInScale { grade: entry.grade });
                }
                ledger.set(table.year, entry.grade_step(), entry.figures())?;
            }
        }

        Ok(ledger)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all salary tables from the salaries directory, ordered by file name.
    fn load_tables(salaries_dir: &Path) -> EngineResult<Vec<SalaryTable>> {
        let salaries_dir_str = salaries_dir.display().to_string();

        let entries = fs::read_dir(salaries_dir).map_err(|_| EngineError::ConfigNotFound {
            path: salaries_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: salaries_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no salary tables found)", salaries_dir_str),
            });
        }

        paths.sort();
        paths.iter().map(|path| Self::load_table(path)).collect()
    }

    /// Loads one salary table and checks its year against a numeric file name.
    fn load_table(path: &Path) -> EngineResult<SalaryTable> {
        let table = Self::load_yaml::<SalaryTable>(path)?;

        let file_year = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<i32>().ok());

        match file_year {
            Some(file_year) if file_year != table.year => Err(EngineError::TableYearMismatch {
                path: path.display().to_string(),
                file_year,
                declared_year: table.year,
            }),
            _ => Ok(table),
        }
    }

    /// Returns the scale metadata.
    pub fn metadata(&self) -> &ScaleMetadata {
        &self.metadata
    }

    /// Returns the grade/step catalog.
    pub fn pay_scale(&self) -> &PayScale {
        &self.pay_scale
    }

    /// Returns the populated salary ledger.
    pub fn ledger(&self) -> &CompensationLedger {
        &self.ledger
    }

    /// Splits the loader into its catalog and ledger.
    pub fn into_parts(self) -> (PayScale, CompensationLedger) {
        (self.pay_scale, self.ledger)
    }
}
