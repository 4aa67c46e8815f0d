//! Consumed budget source contract.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finstat_shared::types::Month;

use crate::ledger::StoreError;

/// A budgeted figure for one reporting line and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetFigure {
    /// The budgeted amount, or budgeted percentage for percentage lines.
    pub amount: Decimal,
    /// True when the figure is a percentage rather than a monetary amount.
    pub is_percentage: bool,
}

/// Read contract for budget figures.
///
/// Budgets are maintained outside the engine and may simply not exist for a
/// line or period; absence is a normal answer, not an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BudgetSource: Send + Sync {
    /// Returns the budgeted figure for a line, cumulative through `month` of
    /// `year`, or `None` when no budget is maintained for it.
    async fn cumulative_budget(
        &self,
        line: &str,
        year: i32,
        month: Month,
    ) -> Result<Option<BudgetFigure>, StoreError>;
}
