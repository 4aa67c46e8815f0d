//! Statement evaluation over the reporting line graph.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use finstat_shared::config::{Direction, EngineConfig, TermOp};
use finstat_shared::types::Month;

use crate::budget::{BudgetSource, BudgetVariance};
use crate::ledger::{LedgerError, LedgerStore, MovementCalculator};
use crate::warnings::{EngineWarning, WarningSink};

use super::category::CategoryAggregator;
use super::error::RollupError;
use super::graph::LineGraph;

/// Which cumulative window the prior-cumulative perspective covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// January through the month before the target month, same year. Empty
    /// for a January statement, which compares against zero.
    PreviousMonth,
    /// January through the target month, one year earlier.
    PriorYear,
}

/// One evaluated statement row.
#[derive(Debug, Clone, Serialize)]
pub struct LineResult {
    /// The reporting line name.
    pub name: String,
    /// Which side of budget is favorable.
    pub direction: Direction,
    /// True for percentage-valued lines.
    pub is_percentage: bool,
    /// Value for the target month alone.
    pub actual: Decimal,
    /// Value for January through the target month.
    pub cumulative: Decimal,
    /// Value for the comparison cumulative window.
    pub prior_cumulative: Decimal,
    /// Cumulative budget through the target month, when one is maintained.
    pub budget: Option<Decimal>,
    /// Variance of the cumulative value against the budget.
    pub variance: Option<BudgetVariance>,
}

/// A fully evaluated statement.
#[derive(Debug, Clone, Serialize)]
pub struct StatementReport {
    /// The target year.
    pub year: i32,
    /// The target month.
    pub month: Month,
    /// The comparison perspective used for `prior_cumulative`.
    pub comparison: Comparison,
    /// Last calendar day of the target month.
    pub as_of: NaiveDate,
    /// Rows in declaration order.
    pub lines: Vec<LineResult>,
    /// Fail-soft warnings absorbed while evaluating.
    pub warnings: Vec<EngineWarning>,
}

impl StatementReport {
    /// Looks up a row by line name.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&LineResult> {
        self.lines.iter().find(|l| l.name == name)
    }
}

/// Evaluates the declared statement for a period.
///
/// The three period perspectives (actual, cumulative, prior cumulative) are
/// computed independently by re-running the same movement and aggregation
/// machinery with a different month window, never by slicing one result out
/// of another.
pub struct StatementEngine {
    movements: MovementCalculator,
    budgets: Arc<dyn BudgetSource>,
    config: Arc<EngineConfig>,
    graph: LineGraph,
}

impl StatementEngine {
    /// Creates an engine, validating the line graph up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared line formulas reference undeclared or
    /// percentage-valued lines, or form a cycle.
    pub fn new(
        store: Arc<dyn LedgerStore>,
        budgets: Arc<dyn BudgetSource>,
        config: Arc<EngineConfig>,
    ) -> Result<Self, RollupError> {
        let graph = LineGraph::build(&config)?;
        let movements = MovementCalculator::new(store, Arc::clone(&config));
        Ok(Self { movements, budgets, config, graph })
    }

    /// Evaluates every declared line for the target period.
    ///
    /// # Errors
    ///
    /// Returns an error when a leaf line references an undeclared account, or
    /// when every ledger read in the request failed; unit-level store and
    /// budget failures degrade to warnings instead.
    pub async fn evaluate(
        &self,
        year: i32,
        month: Month,
        comparison: Comparison,
    ) -> Result<StatementReport, RollupError> {
        let sink = WarningSink::new();

        let actual = self.evaluate_window(year, &[month], &sink).await?;
        let ytd: Vec<Month> = month.year_to_date().collect();
        let cumulative = self.evaluate_window(year, &ytd, &sink).await?;

        let prior_cumulative = match comparison {
            Comparison::PreviousMonth => {
                let window: Vec<Month> = month
                    .prev()
                    .map(|prev| prev.year_to_date().collect())
                    .unwrap_or_default();
                self.evaluate_window(year, &window, &sink).await?
            }
            Comparison::PriorYear => self.evaluate_window(year - 1, &ytd, &sink).await?,
        };

        // An unreachable store fails the request as a whole; an all-zero
        // report with warnings attached is not a valid statement.
        if sink.all_store_reads_failed() {
            return Err(LedgerError::StoreUnavailable.into());
        }

        let mut lines = Vec::with_capacity(self.config.lines.len());
        for line in &self.config.lines {
            let budget = match self
                .budgets
                .cumulative_budget(&line.name, year, month)
                .await
            {
                Ok(figure) => figure,
                Err(err) => {
                    warn!(line = %line.name, year, month = %month, error = %err,
                        "budget read failed, treating budget as absent");
                    sink.push(EngineWarning::BudgetRead {
                        line: line.name.clone(),
                        year,
                        month,
                        detail: err.to_string(),
                    });
                    None
                }
            };

            let value = |values: &HashMap<String, Decimal>| {
                values.get(&line.name).copied().unwrap_or_default()
            };
            let cumulative_value = value(&cumulative);
            let variance = budget
                .map(|figure| BudgetVariance::compute(cumulative_value, figure.amount, line.direction));

            lines.push(LineResult {
                name: line.name.clone(),
                direction: line.direction,
                is_percentage: line.percentage,
                actual: value(&actual),
                cumulative: cumulative_value,
                prior_cumulative: value(&prior_cumulative),
                budget: budget.map(|figure| figure.amount),
                variance,
            });
        }

        debug!(year, month = %month, lines = lines.len(), "statement evaluated");

        Ok(StatementReport {
            year,
            month,
            comparison,
            as_of: month_end(year, month),
            lines,
            warnings: sink.drain(),
        })
    }

    /// Evaluates all lines over one month window, leaves first.
    ///
    /// Leaf lines sum raw movements across their member accounts and months
    /// and round once; composite lines fold their formulas over the already
    /// resolved values.
    async fn evaluate_window(
        &self,
        year: i32,
        months: &[Month],
        sink: &WarningSink,
    ) -> Result<HashMap<String, Decimal>, RollupError> {
        let mut values: HashMap<String, Decimal> = HashMap::with_capacity(self.config.lines.len());

        for &i in self.graph.eval_order() {
            let line = &self.config.lines[i];
            let value = if line.is_leaf() {
                let raw = self
                    .movements
                    .window_movements(&line.members, year, months, sink)
                    .await?;
                CategoryAggregator::total(raw)
            } else {
                line.formula
                    .iter()
                    .map(|term| {
                        let resolved = values.get(&term.line).copied().unwrap_or_default();
                        match term.op {
                            TermOp::Add => resolved,
                            TermOp::Subtract => -resolved,
                        }
                    })
                    .sum()
            };
            values.insert(line.name.clone(), value);
        }

        Ok(values)
    }
}

/// Last calendar day of the given month.
fn month_end(year: i32, month: Month) -> NaiveDate {
    let (next_year, next_month) = if month == Month::DECEMBER {
        (year + 1, 1)
    } else {
        (year, u32::from(month.number()) + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MIN)
}
