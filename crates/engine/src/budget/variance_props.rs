//! Property-based tests for budget variance.
//!
//! - Direction symmetry: the two direction classes mirror each other exactly
//! - Normalization: positive always means favorable
//! - Zero budget never panics and never divides

use proptest::prelude::*;
use rust_decimal::Decimal;

use finstat_shared::config::Direction;

use super::variance::{BudgetVariance, VariancePercent, VarianceStatus};

/// Strategy to generate signed amounts with up to 2 decimal places.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-zero budgets.
fn nonzero_budget() -> impl Strategy<Value = Decimal> {
    amount().prop_filter("budget must be non-zero", |b| !b.is_zero())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* actual and non-zero budget, the favorable-when-higher and
    /// favorable-when-lower percentages SHALL be exact negations.
    #[test]
    fn prop_direction_classes_are_mirrors(
        actual in amount(),
        budget in nonzero_budget(),
    ) {
        let higher = BudgetVariance::compute(actual, budget, Direction::FavorableWhenHigher);
        let lower = BudgetVariance::compute(actual, budget, Direction::FavorableWhenLower);

        let (VariancePercent::Finite(h), VariancePercent::Finite(l)) =
            (higher.percent, lower.percent)
        else {
            return Err(TestCaseError::fail("finite budgets must yield finite percents"));
        };
        prop_assert_eq!(h, -l);
    }

    /// *For any* finite variance, the status SHALL agree with the sign of the
    /// normalized percentage: positive favorable, negative unfavorable.
    #[test]
    fn prop_status_follows_normalized_sign(
        actual in amount(),
        budget in nonzero_budget(),
        direction in prop_oneof![
            Just(Direction::FavorableWhenHigher),
            Just(Direction::FavorableWhenLower),
        ],
    ) {
        let variance = BudgetVariance::compute(actual, budget, direction);
        let VariancePercent::Finite(percent) = variance.percent else {
            return Err(TestCaseError::fail("finite budgets must yield finite percents"));
        };

        let expected = if percent > Decimal::ZERO {
            VarianceStatus::Favorable
        } else if percent < Decimal::ZERO {
            VarianceStatus::Unfavorable
        } else {
            VarianceStatus::OnBudget
        };
        prop_assert_eq!(variance.status, expected);
    }

    /// *For any* budget, the stored sign SHALL not affect the result.
    #[test]
    fn prop_budget_sign_ignored(
        actual in amount(),
        budget in nonzero_budget(),
    ) {
        let plus = BudgetVariance::compute(actual, budget, Direction::FavorableWhenHigher);
        let minus = BudgetVariance::compute(actual, -budget, Direction::FavorableWhenHigher);
        prop_assert_eq!(plus, minus);
    }

    /// *For any* non-zero actual against a zero budget, the result SHALL be
    /// the infinite sentinel, favorable exactly when the actual lies on the
    /// direction class's favorable side of zero.
    #[test]
    fn prop_zero_budget_sentinel(
        actual in amount().prop_filter("actual must be non-zero", |a| !a.is_zero()),
    ) {
        let higher = BudgetVariance::compute(actual, Decimal::ZERO, Direction::FavorableWhenHigher);
        let lower = BudgetVariance::compute(actual, Decimal::ZERO, Direction::FavorableWhenLower);

        prop_assert_eq!(
            higher.percent,
            VariancePercent::Infinite { favorable: actual > Decimal::ZERO }
        );
        prop_assert_eq!(
            lower.percent,
            VariancePercent::Infinite { favorable: actual < Decimal::ZERO }
        );
    }

    /// *For any* actual, matching the budget exactly SHALL be on-budget with
    /// zero variance in both direction classes.
    #[test]
    fn prop_exact_match_is_on_budget(actual in amount()) {
        for direction in [Direction::FavorableWhenHigher, Direction::FavorableWhenLower] {
            let variance = BudgetVariance::compute(actual.abs(), actual.abs(), direction);
            if actual.is_zero() {
                prop_assert_eq!(variance.status, VarianceStatus::OnBudget);
            } else {
                prop_assert_eq!(variance.percent, VariancePercent::Finite(Decimal::ZERO));
                prop_assert_eq!(variance.status, VarianceStatus::OnBudget);
            }
        }
    }
}
