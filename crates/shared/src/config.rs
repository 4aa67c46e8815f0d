//! Engine configuration management.
//!
//! All static reporting configuration lives here: the anchor-year seed table,
//! account classes for the chart of accounts, the sign-correction list, and
//! the declared reporting lines. It is loaded once at startup into an
//! immutable structure and kept fully separate from the computation logic
//! that consumes it.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AccountClass, AccountCode};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration could not be loaded or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Two reporting lines share the same name.
    #[error("duplicate reporting line: {0}")]
    DuplicateLine(String),

    /// A line declares both member accounts and a formula, or neither. An
    /// empty member list or formula is indistinguishable from an absent one,
    /// so those cases land here too.
    #[error("reporting line {0} must declare exactly one of members or formula")]
    AmbiguousLine(String),

    /// A member account has no declared class.
    #[error("account {account} referenced by line {line} has no declared class")]
    MissingAccountClass {
        /// The undeclared account.
        account: AccountCode,
        /// The line referencing it.
        line: String,
    },
}

/// Direction class: which side of budget is favorable for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Revenue, income and profit lines: actual above budget is favorable.
    #[serde(rename = "higher")]
    FavorableWhenHigher,
    /// Cost and expense lines: actual below budget is favorable.
    #[serde(rename = "lower")]
    FavorableWhenLower,
}

/// Sign applied to one composite formula term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermOp {
    /// The referenced line is added.
    Add,
    /// The referenced line is subtracted.
    Subtract,
}

/// One term of a composite reporting line formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Whether the referenced line is added or subtracted.
    pub op: TermOp,
    /// Name of the referenced reporting line.
    pub line: String,
}

/// A declared reporting line.
///
/// Leaf lines carry a fixed set of member account codes; composite lines
/// carry an addition/subtraction formula over other lines. Exactly one of
/// `members` and `formula` must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDef {
    /// Line name, unique within the statement.
    pub name: String,
    /// Which side of budget is favorable.
    pub direction: Direction,
    /// Percentage-valued lines are excluded from additive rollups.
    #[serde(default)]
    pub percentage: bool,
    /// Member account codes (leaf lines).
    #[serde(default)]
    pub members: Vec<AccountCode>,
    /// Formula over other lines (composite lines).
    #[serde(default)]
    pub formula: Vec<Term>,
}

impl LineDef {
    /// Returns true if this line resolves directly from member accounts.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !self.members.is_empty()
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// The fixed year whose opening balances come from the seed table.
    pub anchor_year: i32,
    /// Opening balances at the anchor year; absent accounts default to zero.
    #[serde(default)]
    pub seeds: HashMap<AccountCode, Decimal>,
    /// Account class per chart-of-accounts code.
    #[serde(default)]
    pub accounts: HashMap<AccountCode, AccountClass>,
    /// Accounts whose stored amounts carry inconsistent signs; their sums are
    /// taken over absolute values before the normal sign convention applies.
    #[serde(default)]
    pub sign_corrected: HashSet<AccountCode>,
    /// Declared reporting lines, in statement order.
    #[serde(default)]
    pub lines: Vec<LineDef>,
}

impl EngineConfig {
    /// Loads configuration from files and environment.
    ///
    /// Reads `config/default` then `config/{RUN_MODE}` (both optional), then
    /// applies `FINSTAT__`-prefixed environment overrides, and validates the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINSTAT").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration shape.
    ///
    /// Checks line name uniqueness, the leaf/composite split, and that every
    /// member account has a declared class. Formula references and cycles are
    /// validated when the line graph is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for line in &self.lines {
            if !seen.insert(line.name.as_str()) {
                return Err(ConfigError::DuplicateLine(line.name.clone()));
            }
            match (line.members.is_empty(), line.formula.is_empty()) {
                (false, false) | (true, true) => {
                    return Err(ConfigError::AmbiguousLine(line.name.clone()));
                }
                _ => {}
            }
            for member in &line.members {
                if !self.accounts.contains_key(member) {
                    return Err(ConfigError::MissingAccountClass {
                        account: member.clone(),
                        line: line.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the seeded opening balance at the anchor year, zero if absent.
    #[must_use]
    pub fn seed(&self, account: &AccountCode) -> Decimal {
        self.seeds.get(account).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns the declared class for an account, if any.
    #[must_use]
    pub fn account_class(&self, account: &AccountCode) -> Option<AccountClass> {
        self.accounts.get(account).copied()
    }

    /// Returns true if the account is on the sign-correction list.
    #[must_use]
    pub fn is_sign_corrected(&self, account: &AccountCode) -> bool {
        self.sign_corrected.contains(account)
    }

    /// Looks up a reporting line by name.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&LineDef> {
        self.lines.iter().find(|l| l.name == name)
    }
}
