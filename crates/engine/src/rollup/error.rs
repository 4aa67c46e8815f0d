//! Rollup error types.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors from building or evaluating the reporting line graph.
///
/// Graph-shape errors are configuration errors detected once at build time;
/// they can never surface per request.
#[derive(Debug, Error)]
pub enum RollupError {
    /// A composite formula references a line that is not declared.
    #[error("line {line} references undeclared line {referenced}")]
    UnknownLine {
        /// The composite line holding the reference.
        line: String,
        /// The undeclared line name.
        referenced: String,
    },

    /// A composite line transitively references itself.
    #[error("reporting line {0} is part of a formula cycle")]
    Cycle(String),

    /// A composite formula references a percentage-valued line; those are
    /// excluded from additive rollups.
    #[error("line {line} includes percentage-valued line {referenced} in its formula")]
    PercentageLineInFormula {
        /// The composite line holding the reference.
        line: String,
        /// The percentage-valued line name.
        referenced: String,
    },

    /// An account-level computation failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl RollupError {
    /// Returns the error code for embedding layers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLine { .. } => "UNKNOWN_LINE",
            Self::Cycle(_) => "LINE_CYCLE",
            Self::PercentageLineInFormula { .. } => "PERCENTAGE_IN_FORMULA",
            Self::Ledger(err) => err.error_code(),
        }
    }
}
