//! Property-based tests for category aggregation.
//!
//! - Single rounding: every category point is the rounded sum of raw values
//! - Bounded drift: a category point stays within ±1 per member of the sum of
//!   the members' displayed points
//! - Contra neutrality: a member and its exact negation cancel

use proptest::prelude::*;
use rust_decimal::Decimal;

use finstat_shared::types::AccountCode;

use crate::ledger::BalanceTrajectory;
use crate::rounding::round_unit;

use super::category::CategoryAggregator;

/// Strategy to generate signed movements with up to 2 decimal places.
fn movement() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a trajectory with a whole-unit opening.
fn member() -> impl Strategy<Value = BalanceTrajectory> {
    (
        -1_000_000i64..1_000_000i64,
        prop::array::uniform12(movement()),
    )
        .prop_map(|(opening, movements)| {
            BalanceTrajectory::from_movements(
                AccountCode::from("1010"),
                2026,
                Decimal::from(opening),
                movements,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* members, each category point SHALL equal the rounded sum of
    /// the members' raw cumulative values at that point.
    #[test]
    fn prop_point_is_rounded_raw_sum(members in prop::collection::vec(member(), 1..5)) {
        let category = CategoryAggregator::aggregate("Category", &members);

        for (i, point) in category.points.iter().enumerate() {
            let raw: Decimal = members
                .iter()
                .map(|m| {
                    m.opening + m.raw_months[..i].iter().copied().sum::<Decimal>()
                })
                .sum();
            prop_assert_eq!(*point, round_unit(raw));
        }
    }

    /// *For any* members, each category point SHALL stay within one unit per
    /// member of the sum of the members' displayed (rounded) points.
    #[test]
    fn prop_drift_from_display_sum_is_bounded(members in prop::collection::vec(member(), 1..5)) {
        let category = CategoryAggregator::aggregate("Category", &members);
        let bound = Decimal::from(members.len());

        for (i, point) in category.points.iter().enumerate() {
            let display_sum: Decimal = members.iter().map(|m| m.points()[i]).sum();
            prop_assert!((*point - display_sum).abs() <= bound);
        }
    }

    /// *For any* member, aggregating it with its exact negation SHALL yield
    /// zero at every point.
    #[test]
    fn prop_contra_member_cancels(m in member()) {
        let contra = BalanceTrajectory::from_movements(
            AccountCode::from("1020"),
            m.year,
            -m.opening,
            m.raw_months.map(|v| -v),
        );
        let category = CategoryAggregator::aggregate("Category", &[m, contra]);
        for point in category.points {
            prop_assert_eq!(point, Decimal::ZERO);
        }
    }

    /// *For any* whole-unit values, the category total SHALL be the plain sum.
    #[test]
    fn prop_integer_total_is_exact(units in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..8)) {
        let values: Vec<Decimal> = units.iter().copied().map(Decimal::from).collect();
        let expected: Decimal = values.iter().copied().sum();
        prop_assert_eq!(CategoryAggregator::total(values), expected);
    }
}
