//! Fail-soft warning collection.
//!
//! Store failures are absorbed at the smallest unit (one account, one month)
//! so the surrounding computation can complete, trading completeness for
//! availability. Every absorbed failure is recorded here and must be surfaced
//! to the caller rather than silently degrading accuracy. The sink also
//! counts ledger reads that succeeded, so a request can tell a partial outage
//! apart from a totally unreachable store; the latter must fail the request
//! as a whole instead of returning an all-zero result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use thiserror::Error;

use finstat_shared::types::{AccountCode, Month};

/// A unit-level failure that was absorbed instead of aborting the request.
#[derive(Debug, Clone, Serialize, Error)]
pub enum EngineWarning {
    /// A store read failed and was coerced to a zero movement.
    #[error("store read failed for account {account} in {year}-{month}: {detail}")]
    StoreRead {
        /// The affected account.
        account: AccountCode,
        /// The affected year.
        year: i32,
        /// The affected month.
        month: Month,
        /// The underlying store error.
        detail: String,
    },

    /// A budget figure could not be fetched and was treated as absent.
    #[error("budget read failed for line {line} in {year}-{month}: {detail}")]
    BudgetRead {
        /// The affected reporting line.
        line: String,
        /// The affected year.
        year: i32,
        /// The affected month.
        month: Month,
        /// The underlying source error.
        detail: String,
    },
}

/// Request-scoped sink for fail-soft warnings.
///
/// Shared by reference across the concurrent per-month reads of one request.
#[derive(Debug, Default)]
pub struct WarningSink {
    inner: Mutex<Vec<EngineWarning>>,
    read_successes: AtomicU64,
}

impl WarningSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one successful ledger read.
    pub fn record_read_success(&self) {
        self.read_successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns true when at least one ledger read failed and none succeeded.
    ///
    /// Budget reads are a separate collaborator and do not count either way.
    /// Only meaningful once the request's reads have completed.
    #[must_use]
    pub fn all_store_reads_failed(&self) -> bool {
        if self.read_successes.load(Ordering::Relaxed) > 0 {
            return false;
        }
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|warning| matches!(warning, EngineWarning::StoreRead { .. }))
    }

    /// Records a warning.
    pub fn push(&self, warning: EngineWarning) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning);
    }

    /// Takes all recorded warnings, leaving the sink empty.
    #[must_use]
    pub fn drain(&self) -> Vec<EngineWarning> {
        std::mem::take(&mut *self.inner.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Returns the number of recorded warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
