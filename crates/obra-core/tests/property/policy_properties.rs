use obra_core::models::{BreakdownPolicy, Comparison};
use proptest::prelude::*;

fn presets() -> impl Strategy<Value = BreakdownPolicy> {
    prop_oneof![
        Just(BreakdownPolicy::MODEL_BACKED),
        Just(BreakdownPolicy::CLOSED_FORM),
    ]
}

proptest! {
    #[test]
    fn breakdown_sums_to_total(total in 0.0f64..1e9, policy in presets()) {
        let result = policy.apply(total);
        let tolerance = 1e-9 * total.max(1.0);
        prop_assert!((result.breakdown.sum() - total).abs() <= tolerance);
    }

    #[test]
    fn range_brackets_total(total in 0.0f64..1e9, policy in presets()) {
        let result = policy.apply(total);
        prop_assert!(result.range.min <= result.total);
        prop_assert!(result.total <= result.range.max);
    }

    #[test]
    fn breakdown_is_non_negative(total in 0.0f64..1e9, policy in presets()) {
        let b = policy.apply(total).breakdown;
        prop_assert!(b.foundation >= 0.0 && b.walls >= 0.0 && b.coverage >= 0.0 && b.finishes >= 0.0);
    }

    #[test]
    fn comparison_is_antisymmetric(a in 0.0f64..1e8, b in 0.0f64..1e8) {
        let policy = BreakdownPolicy::MODEL_BACKED;
        let forward = Comparison::new(policy.apply(a), policy.apply(b));
        let backward = Comparison::new(policy.apply(b), policy.apply(a));
        prop_assert_eq!(forward.difference, -backward.difference);
        prop_assert_eq!(forward.first.total, backward.second.total);
        prop_assert_eq!(forward.second.total, backward.first.total);
    }

    #[test]
    fn custom_policy_keeps_invariants(
        weights in proptest::array::uniform4(0.01f64..10.0),
        min_factor in 0.0f64..1.0,
        max_factor in 1.0f64..3.0,
        total in 0.0f64..1e7,
    ) {
        let sum: f64 = weights.iter().sum();
        let f = weights.map(|w| w / sum);
        // Push the rounding residue into the last fraction.
        let finishes = 1.0 - f[0] - f[1] - f[2];
        if let Ok(policy) = BreakdownPolicy::new(f[0], f[1], f[2], finishes, min_factor, max_factor) {
            let result = policy.apply(total);
            prop_assert!((result.breakdown.sum() - total).abs() <= 1e-6 * total.max(1.0));
            prop_assert!(result.range.min <= result.total && result.total <= result.range.max);
        }
    }
}
