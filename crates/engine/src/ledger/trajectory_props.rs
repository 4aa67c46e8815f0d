//! Property-based tests for balance trajectories.
//!
//! - Whole-unit points: every published point is rounded
//! - Stepwise accumulation: each point derives from the previous rounded point
//! - Year chaining: next year's opening equals this year's December closing

use proptest::prelude::*;
use rust_decimal::Decimal;

use finstat_shared::types::AccountCode;

use super::trajectory::BalanceTrajectory;
use crate::rounding::round_unit;

/// Strategy to generate signed movements with up to 2 decimal places
/// (-100,000.00 to 100,000.00).
fn movement() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a full year of movements.
fn year_movements() -> impl Strategy<Value = [Decimal; 12]> {
    prop::array::uniform12(movement())
}

/// Strategy to generate a rounded opening balance.
fn opening_balance() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(Decimal::from)
}

fn trajectory(opening: Decimal, movements: [Decimal; 12]) -> BalanceTrajectory {
    BalanceTrajectory::from_movements(AccountCode::from("1010"), 2026, opening, movements)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* opening balance and movements, every published point SHALL
    /// already be rounded to the whole unit.
    #[test]
    fn prop_all_points_are_whole_units(
        opening in opening_balance(),
        movements in year_movements(),
    ) {
        let trajectory = trajectory(opening, movements);
        for point in trajectory.points() {
            prop_assert_eq!(point, round_unit(point));
        }
    }

    /// *For any* month, its point SHALL equal the previous rounded point plus
    /// that month's movement, rounded once.
    #[test]
    fn prop_stepwise_accumulation(
        opening in opening_balance(),
        movements in year_movements(),
    ) {
        let trajectory = trajectory(opening, movements);
        let points = trajectory.points();
        for i in 0..12 {
            prop_assert_eq!(points[i + 1], round_unit(points[i] + movements[i]));
        }
    }

    /// *For any* two consecutive years, the second year's trajectory built
    /// from the first year's December closing SHALL open exactly there; the
    /// fold that produces closings is the same fold that publishes them.
    #[test]
    fn prop_years_chain_without_discontinuity(
        opening in opening_balance(),
        first_year in year_movements(),
        second_year in year_movements(),
    ) {
        let first = trajectory(opening, first_year);
        let second = BalanceTrajectory::from_movements(
            AccountCode::from("1010"),
            2027,
            first.closing(),
            second_year,
        );
        prop_assert_eq!(second.opening, first.closing());
        prop_assert_eq!(second.points()[0], first.points()[12]);
    }

    /// *For any* opening balance, a year with no movements SHALL be flat.
    #[test]
    fn prop_dormant_year_is_flat(opening in opening_balance()) {
        let trajectory = trajectory(opening, [Decimal::ZERO; 12]);
        for point in trajectory.points() {
            prop_assert_eq!(point, opening);
        }
    }

    /// *For any* whole-unit movements, stepwise rounding SHALL be a no-op and
    /// the closing SHALL equal opening plus the plain sum.
    #[test]
    fn prop_integer_movements_sum_exactly(
        opening in opening_balance(),
        units in prop::array::uniform12(-1_000_000i64..1_000_000i64),
    ) {
        let movements = units.map(Decimal::from);
        let trajectory = trajectory(opening, movements);
        let total: Decimal = movements.iter().copied().sum();
        prop_assert_eq!(trajectory.closing(), opening + total);
    }
}
