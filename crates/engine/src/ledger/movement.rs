//! Monthly net movement calculation.

use std::sync::Arc;

use futures::future::try_join_all;
use rust_decimal::Decimal;
use tracing::warn;

use finstat_shared::config::EngineConfig;
use finstat_shared::types::{AccountCode, Month};

use crate::warnings::{EngineWarning, WarningSink};

use super::error::LedgerError;
use super::store::{LedgerStore, SumMode};

/// Turns a debit/credit sum pair into one signed net movement per the
/// account-class sign convention.
///
/// Accounts on the configured sign-correction list (a historical data-entry
/// defect where raw amounts were stored with inconsistent sign under either
/// flag) are summed from absolute stored amounts before the same convention
/// applies; all other accounts use raw signed amounts.
#[derive(Clone)]
pub struct MovementCalculator {
    store: Arc<dyn LedgerStore>,
    config: Arc<EngineConfig>,
}

impl MovementCalculator {
    /// Creates a calculator over the given store and configuration.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>, config: Arc<EngineConfig>) -> Self {
        Self { store, config }
    }

    /// Returns the signed net movement for one account in one month.
    ///
    /// Zero when the month has no unlocked entries. A store failure is
    /// absorbed as a zero movement and recorded in `sink`; only an account
    /// with no declared class is a hard error.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAccount`] if the account has no declared
    /// class in the configuration.
    pub async fn movement(
        &self,
        account: &AccountCode,
        year: i32,
        month: Month,
        sink: &WarningSink,
    ) -> Result<Decimal, LedgerError> {
        let class = self
            .config
            .account_class(account)
            .ok_or_else(|| LedgerError::UnknownAccount(account.clone()))?;

        let mode = if self.config.is_sign_corrected(account) {
            SumMode::Absolute
        } else {
            SumMode::Signed
        };

        let sums = match self
            .store
            .monthly_sums(std::slice::from_ref(account), year, month, mode)
            .await
        {
            Ok(sums) => {
                sink.record_read_success();
                sums
            }
            Err(err) => {
                warn!(
                    account = %account,
                    year,
                    month = %month,
                    error = %err,
                    "store read failed, coercing to zero movement"
                );
                sink.push(EngineWarning::StoreRead {
                    account: account.clone(),
                    year,
                    month,
                    detail: err.to_string(),
                });
                return Ok(Decimal::ZERO);
            }
        };

        if sums.count == 0 {
            return Ok(Decimal::ZERO);
        }

        Ok(class.normal_balance().movement(sums.debit_sum, sums.credit_sum))
    }

    /// Movements for all twelve months of a year.
    ///
    /// The monthly reads have no ordering dependency and are issued
    /// concurrently; only the fold that consumes them is sequential.
    pub async fn year_movements(
        &self,
        account: &AccountCode,
        year: i32,
        sink: &WarningSink,
    ) -> Result<[Decimal; 12], LedgerError> {
        let reads = Month::all().map(|month| self.movement(account, year, month, sink));
        let results = try_join_all(reads).await?;

        let mut movements = [Decimal::ZERO; 12];
        for (slot, value) in movements.iter_mut().zip(results) {
            *slot = value;
        }
        Ok(movements)
    }

    /// Raw movements for every (account, month) pair of a window, fetched
    /// concurrently. Callers sum and round once at their own boundary.
    pub async fn window_movements(
        &self,
        accounts: &[AccountCode],
        year: i32,
        months: &[Month],
        sink: &WarningSink,
    ) -> Result<Vec<Decimal>, LedgerError> {
        let reads = accounts.iter().flat_map(|account| {
            months
                .iter()
                .map(move |&month| self.movement(account, year, month, sink))
        });
        try_join_all(reads).await
    }
}
