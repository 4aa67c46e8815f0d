//! Budget figures and variance analysis.

pub mod source;
pub mod variance;

#[cfg(test)]
mod variance_props;

pub use source::{BudgetFigure, BudgetSource};
pub use variance::{BudgetVariance, VariancePercent, VarianceStatus};
