//! Configuration loading for the pay scale engine.
//!
//! This module loads the grade catalog and the yearly salary tables from YAML
//! files and populates a [`CompensationLedger`](crate::calculation::CompensationLedger).
//!
//! # Example
//!
//! ```no_run
//! use pay_scale_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tv-l").unwrap();
//! println!("Loaded scale: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SalaryEntry, SalaryTable, ScaleConfig, ScaleMetadata};
