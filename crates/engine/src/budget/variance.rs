//! Direction-aware budget variance.

use rust_decimal::Decimal;
use serde::Serialize;

use finstat_shared::config::Direction;

use crate::rounding::round_unit;

/// A variance percentage, or the sentinel for a zero budget with a non-zero
/// actual. The sentinel is a normal value, never an error: division by a zero
/// budget is an expected configuration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VariancePercent {
    /// A finite percentage, rounded to the whole point. Positive always means
    /// favorable regardless of the line's direction class.
    Finite(Decimal),
    /// Unbounded variance against a zero budget; carries only favorability.
    Infinite {
        /// Whether the unbounded variance is in the line's favorable direction.
        favorable: bool,
    },
}

/// Favorability classification of a variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Actual is on the favorable side of budget.
    Favorable,
    /// Actual is on the unfavorable side of budget.
    Unfavorable,
    /// Actual matches budget exactly.
    OnBudget,
}

/// Comparison of an actual figure against its budget for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetVariance {
    /// Normalized variance percentage (positive = favorable).
    pub percent: VariancePercent,
    /// Favorability classification derived from the percentage.
    pub status: VarianceStatus,
    /// Actual as a rounded percentage of the budget magnitude, regardless of
    /// direction class. Absent for a zero budget.
    pub utilization: Option<Decimal>,
}

impl BudgetVariance {
    /// Computes the variance of `actual` against `budget` for a line with the
    /// given direction class.
    ///
    /// The budget's stored sign is taken as magnitude only. For
    /// favorable-when-higher lines the percentage is
    /// `(actual − |budget|) / |budget| × 100`; for favorable-when-lower lines
    /// it is `(|budget| − actual) / |budget| × 100`. Both are normalized so a
    /// positive result always means favorable performance.
    #[must_use]
    pub fn compute(actual: Decimal, budget: Decimal, direction: Direction) -> Self {
        let magnitude = budget.abs();

        if magnitude.is_zero() {
            if actual.is_zero() {
                return Self {
                    percent: VariancePercent::Finite(Decimal::ZERO),
                    status: VarianceStatus::OnBudget,
                    utilization: None,
                };
            }
            let favorable = match direction {
                Direction::FavorableWhenHigher => actual > Decimal::ZERO,
                Direction::FavorableWhenLower => actual < Decimal::ZERO,
            };
            return Self {
                percent: VariancePercent::Infinite { favorable },
                status: if favorable {
                    VarianceStatus::Favorable
                } else {
                    VarianceStatus::Unfavorable
                },
                utilization: None,
            };
        }

        let numerator = match direction {
            Direction::FavorableWhenHigher => actual - magnitude,
            Direction::FavorableWhenLower => magnitude - actual,
        };
        let percent = round_unit(numerator / magnitude * Decimal::ONE_HUNDRED);

        let status = if percent > Decimal::ZERO {
            VarianceStatus::Favorable
        } else if percent < Decimal::ZERO {
            VarianceStatus::Unfavorable
        } else {
            VarianceStatus::OnBudget
        };

        Self {
            percent: VariancePercent::Finite(percent),
            status,
            utilization: Some(round_unit(actual / magnitude * Decimal::ONE_HUNDRED)),
        }
    }
}
