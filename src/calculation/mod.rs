//! Calculation logic for the pay scale engine.
//!
//! This module contains the salary ledger with its employer cost queries and
//! the rounding rule applied to every derived money amount.

mod ledger;
mod rounding;

pub use ledger::{CompensationLedger, employer_surcharge_factor, employer_surcharge_rate};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
