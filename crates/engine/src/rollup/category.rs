//! Category aggregation of member accounts into one reporting line.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::BalanceTrajectory;
use crate::rounding::round_unit;

/// A reporting line's 13-point trajectory, one rounded point per time point.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTrajectory {
    /// The reporting line name.
    pub name: String,
    /// Rounded points: opening, then January through December.
    pub points: [Decimal; 13],
}

/// Sums member values into category totals.
///
/// Summation always happens on unrounded member values, and the category
/// rounds once at its own boundary. A category total can therefore differ by
/// ±1 from the naive sum of its members' rounded display figures; that is the
/// published rounding policy, not a defect. Contra accounts need no special
/// handling: negative contributions flow through the same sum.
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Sums raw values and rounds the total once.
    #[must_use]
    pub fn total<I>(values: I) -> Decimal
    where
        I: IntoIterator<Item = Decimal>,
    {
        round_unit(values.into_iter().sum())
    }

    /// Aggregates member trajectories into one category trajectory.
    ///
    /// Each point sums the members' raw cumulative values at that point (the
    /// rounded opening plus unrounded movements), then rounds once.
    #[must_use]
    pub fn aggregate(name: impl Into<String>, members: &[BalanceTrajectory]) -> CategoryTrajectory {
        let mut raw = [Decimal::ZERO; 13];
        for member in members {
            let mut running = member.opening;
            raw[0] += running;
            for (slot, movement) in raw[1..].iter_mut().zip(member.raw_months) {
                running += movement;
                *slot += running;
            }
        }
        CategoryTrajectory {
            name: name.into(),
            points: raw.map(round_unit),
        }
    }
}
