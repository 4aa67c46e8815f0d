//! Account reference types.
//!
//! Accounts are immutable reference data owned by the chart of accounts;
//! the engine only needs the code (unique key) and the account class, from
//! which the normal-balance side is derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart-of-accounts code, the unique key for an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(String);

impl AccountCode {
    /// Creates an account code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for AccountCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account classification determining the normal-balance side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountClass {
    /// Asset accounts (cash, receivables, fixed assets).
    Asset,
    /// Liability accounts (payables, loans).
    Liability,
    /// Equity accounts (capital, retained earnings).
    Equity,
    /// Revenue accounts (sales, other income).
    Revenue,
    /// Expense accounts (cost of sales, operating expenses).
    Expense,
}

impl AccountClass {
    /// Returns the normal-balance side for this class.
    ///
    /// Asset and expense balances increase on debits; liability, equity and
    /// revenue balances increase on credits.
    #[must_use]
    pub fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::DebitNormal,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::CreditNormal,
        }
    }
}

impl std::str::FromStr for AccountClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Invalid account class: {s}")),
        }
    }
}

impl std::fmt::Display for AccountClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
            Self::Equity => write!(f, "equity"),
            Self::Revenue => write!(f, "revenue"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// Which entry side conventionally increases an account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (asset, expense).
    DebitNormal,
    /// Credit-normal accounts (liability, equity, revenue).
    CreditNormal,
}

impl NormalBalance {
    /// Calculates the signed net movement from a debit/credit sum pair.
    ///
    /// Debit-normal: movement = debit - credit.
    /// Credit-normal: movement = credit - debit.
    #[must_use]
    pub fn movement(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::DebitNormal => debit - credit,
            Self::CreditNormal => credit - debit,
        }
    }
}
