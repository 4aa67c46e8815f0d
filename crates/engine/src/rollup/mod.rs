//! Statement rollup: category aggregation and the reporting line graph.

pub mod category;
pub mod error;
pub mod graph;
pub mod statement;

#[cfg(test)]
mod category_props;

pub use category::{CategoryAggregator, CategoryTrajectory};
pub use error::RollupError;
pub use graph::LineGraph;
pub use statement::{Comparison, LineResult, StatementEngine, StatementReport};
