//! Core data models for the pay scale engine.
//!
//! This module contains the pay scale catalog (grades and steps), the
//! position record with its step advancement rules, and salary figures.

mod grade;
mod grade_step;
mod pay_scale;
mod position;
mod salary;
mod step;

pub use grade::Grade;
pub use grade_step::GradeStep;
pub use pay_scale::PayScale;
pub use position::{Advancement, Position};
pub use salary::SalaryFigures;
pub use step::Step;
