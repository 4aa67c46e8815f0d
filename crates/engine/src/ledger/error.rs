//! Ledger computation error types.

use finstat_shared::types::AccountCode;
use thiserror::Error;

/// Errors that can occur during balance computation.
///
/// Store failures are not represented here: they are absorbed per account and
/// month as zero movements with a warning (see [`crate::warnings`]). These
/// errors are configuration problems that no partial result can paper over.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Account has no declared class in the engine configuration.
    #[error("account {0} has no declared class")]
    UnknownAccount(AccountCode),

    /// The target year precedes the anchor year; nothing is derivable there.
    #[error("year {year} precedes the anchor year {anchor}")]
    BeforeAnchor {
        /// The requested year.
        year: i32,
        /// The configured anchor year.
        anchor: i32,
    },

    /// Every ledger read in the request failed. Unit-level failures degrade
    /// to zero movements with warnings, but a totally unreachable store fails
    /// the request with no partial data.
    #[error("ledger store unreachable: every read in the request failed")]
    StoreUnavailable,
}

impl LedgerError {
    /// Returns the error code for embedding layers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAccount(_) => "UNKNOWN_ACCOUNT",
            Self::BeforeAnchor { .. } => "BEFORE_ANCHOR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
        }
    }
}
