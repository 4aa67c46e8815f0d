//! Cumulative-value rounding policy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a cumulative balance to the nearest whole unit, half away from zero.
///
/// Rounding is applied at every aggregation boundary (account, category,
/// statement line) on the cumulative value, never on individual movements.
/// A parent total can therefore differ by one unit from the naive sum of its
/// already-rounded children; reports depend on figures matching column by
/// column, so this behavior must not be "corrected".
#[must_use]
pub fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
