//! Opening balance resolution.
//!
//! Opening balances are not stored anywhere past the anchor year; they are
//! derived. The anchor year opens from the seed table, and every later year
//! opens from the previous year's December closing balance, computed with the
//! exact same stepwise-rounded fold as the published trajectories so the two
//! can never disagree.

use std::sync::Arc;

use moka::sync::Cache;
use rust_decimal::Decimal;

use finstat_shared::config::EngineConfig;
use finstat_shared::types::AccountCode;

use crate::rounding::round_unit;
use crate::warnings::WarningSink;

use super::error::LedgerError;
use super::movement::MovementCalculator;
use super::trajectory::BalanceTrajectory;

/// December closings are immutable once the year's books settle, so they are
/// safe to memoize across requests.
const CLOSING_CACHE_CAPACITY: u64 = 10_000;

/// Resolves opening balances by rolling forward from the anchor year.
#[derive(Clone)]
pub struct OpeningBalanceResolver {
    movements: MovementCalculator,
    config: Arc<EngineConfig>,
    closings: Cache<(AccountCode, i32), Decimal>,
}

impl OpeningBalanceResolver {
    /// Creates a resolver with an empty closing-balance cache.
    #[must_use]
    pub fn new(movements: MovementCalculator, config: Arc<EngineConfig>) -> Self {
        Self {
            movements,
            config,
            closings: Cache::new(CLOSING_CACHE_CAPACITY),
        }
    }

    /// Returns the rounded opening balance of `account` for `year`.
    ///
    /// The recursion of "opening = prior December closing" is unrolled into a
    /// forward walk from the anchor year; each intermediate year's closing is
    /// cached, so a warm request costs no store reads for past years.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BeforeAnchor`] for years before the anchor year
    /// and [`LedgerError::UnknownAccount`] for undeclared accounts.
    pub async fn opening_balance(
        &self,
        account: &AccountCode,
        year: i32,
        sink: &WarningSink,
    ) -> Result<Decimal, LedgerError> {
        let anchor = self.config.anchor_year;
        if year < anchor {
            return Err(LedgerError::BeforeAnchor { year, anchor });
        }

        let mut opening = round_unit(self.config.seed(account));
        for y in anchor..year {
            let key = (account.clone(), y);
            if let Some(closing) = self.closings.get(&key) {
                opening = closing;
                continue;
            }
            let movements = self.movements.year_movements(account, y, sink).await?;
            let closing =
                BalanceTrajectory::from_movements(account.clone(), y, opening, movements).closing();
            self.closings.insert(key, closing);
            opening = closing;
        }
        Ok(opening)
    }
}
