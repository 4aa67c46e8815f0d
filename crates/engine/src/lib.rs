//! Ledger balance aggregation and statement rollup engine.
//!
//! This crate contains pure computation with ZERO web or database
//! dependencies. It reads monthly debit/credit sums from an external ledger
//! store and derives period balances, running-balance trajectories, rolled-up
//! financial-statement lines, and budget variance from them.
//!
//! # Modules
//!
//! - `ledger` - monthly movements, opening balances, balance trajectories
//! - `rollup` - category aggregation and the statement line graph
//! - `budget` - direction-aware budget variance
//! - `rounding` - the cumulative-value rounding policy
//! - `warnings` - fail-soft warning collection

pub mod budget;
pub mod ledger;
pub mod rollup;
pub mod rounding;
pub mod warnings;
