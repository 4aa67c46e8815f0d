//! Ledger reads and per-account balance computation.
//!
//! This module implements the account-level half of the engine:
//! - The consumed ledger store contract (monthly debit/credit sums)
//! - Monthly net movements with account-class sign conventions
//! - Opening balance resolution anchored at the seed year
//! - 13-point running-balance trajectories

pub mod error;
pub mod movement;
pub mod opening;
pub mod store;
pub mod trajectory;

#[cfg(test)]
mod trajectory_props;

pub use error::LedgerError;
pub use movement::MovementCalculator;
pub use opening::OpeningBalanceResolver;
pub use store::{LedgerStore, MonthlySums, StoreError, SumMode};
pub use trajectory::{BalanceTrajectory, TrajectoryBuilder};
