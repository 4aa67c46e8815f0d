//! 13-point running-balance trajectories.

use std::sync::Arc;

use futures::future::try_join_all;
use rust_decimal::Decimal;
use serde::Serialize;

use finstat_shared::config::EngineConfig;
use finstat_shared::types::{AccountCode, Month};

use crate::rounding::round_unit;
use crate::warnings::WarningSink;

use super::error::LedgerError;
use super::movement::MovementCalculator;
use super::opening::OpeningBalanceResolver;
use super::store::LedgerStore;

/// A full-year running balance for one account: the opening balance followed
/// by twelve month-end closing balances.
///
/// Each point is rounded to the whole unit as soon as it is formed, and the
/// next month accumulates from the rounded value. December's point is the
/// closing balance the next year opens with, so consecutive years always
/// chain without a visible discontinuity.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceTrajectory {
    /// The account this trajectory belongs to.
    pub account: AccountCode,
    /// The year covered.
    pub year: i32,
    /// Rounded opening balance (the January 1 position).
    pub opening: Decimal,
    /// Rounded month-end balances, January through December.
    pub months: [Decimal; 12],
    /// Unrounded net movements per month, kept for aggregations that sum raw
    /// values across accounts before rounding once.
    pub raw_months: [Decimal; 12],
}

impl BalanceTrajectory {
    /// Folds monthly movements into a trajectory.
    ///
    /// `opening` must already be rounded; each month-end point is the rounded
    /// sum of the previous point and that month's movement.
    #[must_use]
    pub fn from_movements(
        account: AccountCode,
        year: i32,
        opening: Decimal,
        movements: [Decimal; 12],
    ) -> Self {
        let mut months = [Decimal::ZERO; 12];
        let mut running = opening;
        for (point, movement) in months.iter_mut().zip(movements) {
            running = round_unit(running + movement);
            *point = running;
        }
        Self { account, year, opening, months, raw_months: movements }
    }

    /// The December closing balance.
    #[must_use]
    pub fn closing(&self) -> Decimal {
        self.months[11]
    }

    /// The closing balance at the end of the given month.
    #[must_use]
    pub fn month(&self, month: Month) -> Decimal {
        self.months[month.index()]
    }

    /// All 13 points in order: opening, then January through December.
    #[must_use]
    pub fn points(&self) -> [Decimal; 13] {
        let mut points = [Decimal::ZERO; 13];
        points[0] = self.opening;
        points[1..].copy_from_slice(&self.months);
        points
    }
}

/// Builds balance trajectories from the ledger store.
#[derive(Clone)]
pub struct TrajectoryBuilder {
    movements: MovementCalculator,
    opening: OpeningBalanceResolver,
}

impl TrajectoryBuilder {
    /// Creates a builder over the given store and configuration.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>, config: Arc<EngineConfig>) -> Self {
        let movements = MovementCalculator::new(store, Arc::clone(&config));
        let opening = OpeningBalanceResolver::new(movements.clone(), config);
        Self { movements, opening }
    }

    /// Builds the trajectory for one account and year.
    ///
    /// # Errors
    ///
    /// Returns an error for an undeclared account, a year preceding the
    /// anchor year, or a store none of the request's reads could reach.
    pub async fn build(
        &self,
        account: &AccountCode,
        year: i32,
        sink: &WarningSink,
    ) -> Result<BalanceTrajectory, LedgerError> {
        let trajectory = self.build_unchecked(account, year, sink).await?;
        if sink.all_store_reads_failed() {
            return Err(LedgerError::StoreUnavailable);
        }
        Ok(trajectory)
    }

    /// Builds trajectories for several accounts in the same year.
    ///
    /// The total-unavailability check covers the whole batch: a store that
    /// answered for any account is a partial outage, absorbed per month.
    pub async fn build_many(
        &self,
        accounts: &[AccountCode],
        year: i32,
        sink: &WarningSink,
    ) -> Result<Vec<BalanceTrajectory>, LedgerError> {
        let builds = accounts
            .iter()
            .map(|account| self.build_unchecked(account, year, sink));
        let trajectories = try_join_all(builds).await?;
        if !accounts.is_empty() && sink.all_store_reads_failed() {
            return Err(LedgerError::StoreUnavailable);
        }
        Ok(trajectories)
    }

    async fn build_unchecked(
        &self,
        account: &AccountCode,
        year: i32,
        sink: &WarningSink,
    ) -> Result<BalanceTrajectory, LedgerError> {
        let opening = self.opening.opening_balance(account, year, sink).await?;
        let movements = self.movements.year_movements(account, year, sink).await?;
        Ok(BalanceTrajectory::from_movements(
            account.clone(),
            year,
            opening,
            movements,
        ))
    }
}
