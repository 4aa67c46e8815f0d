//! Consumed ledger store contract.
//!
//! The raw entry storage and its query surface are external collaborators;
//! this is the one read operation the engine needs from them.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use finstat_shared::types::{AccountCode, Month};

/// Aggregated debit/credit sums for a set of accounts in one month.
///
/// Locked entries are excluded; a month with no unlocked entries has a count
/// of zero and zero sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySums {
    /// Sum of debit-flagged amounts.
    pub debit_sum: Decimal,
    /// Sum of credit-flagged amounts.
    pub credit_sum: Decimal,
    /// Number of unlocked entries matched.
    pub count: u64,
}

/// How stored amounts are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SumMode {
    /// Raw signed amounts as stored.
    Signed,
    /// Absolute values of stored amounts, for sign-corrected accounts whose
    /// historical data carries inconsistent signs under either flag.
    Absolute,
}

/// Errors from the ledger store collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is unreachable.
    #[error("ledger store unavailable: {0}")]
    Unavailable(String),

    /// A query failed on the store side.
    #[error("ledger store query failed: {0}")]
    Query(String),
}

/// Read contract the engine needs from the ledger store.
///
/// Implementations must restrict all sums to unlocked entries. Multiple
/// account codes may be queried together when the caller does not need them
/// individually. Read-only; no side effects.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Sums debits and credits for `accounts` in the given year and month.
    async fn monthly_sums(
        &self,
        accounts: &[AccountCode],
        year: i32,
        month: Month,
        mode: SumMode,
    ) -> Result<MonthlySums, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_store_contract() {
        let mut store = MockLedgerStore::new();
        store.expect_monthly_sums().returning(|accounts, year, month, mode| {
            assert_eq!(accounts.len(), 1);
            assert_eq!(year, 2026);
            assert_eq!(month, Month::JANUARY);
            assert_eq!(mode, SumMode::Signed);
            Ok(MonthlySums {
                debit_sum: dec!(15000),
                credit_sum: dec!(5289),
                count: 7,
            })
        });

        let sums = store
            .monthly_sums(&[AccountCode::from("1010")], 2026, Month::JANUARY, SumMode::Signed)
            .await
            .unwrap();
        assert_eq!(sums.debit_sum, dec!(15000));
        assert_eq!(sums.credit_sum, dec!(5289));
        assert_eq!(sums.count, 7);
    }

    #[test]
    fn test_empty_month_default() {
        let sums = MonthlySums::default();
        assert_eq!(sums.debit_sum, Decimal::ZERO);
        assert_eq!(sums.credit_sum, Decimal::ZERO);
        assert_eq!(sums.count, 0);
    }
}
