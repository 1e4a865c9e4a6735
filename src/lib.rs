//! Pay scale engine for tiered public-sector salaries
//!
//! This crate models pay grades and steps, projects an employee's position
//! forward by applying automatic step advancements, and looks up monthly
//! employer cost and annual bonus from published salary tables.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
