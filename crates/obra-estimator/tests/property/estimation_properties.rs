use obra_core::house::*;
use obra_core::models::BreakdownPolicy;
use obra_estimator::strategies::{age_factor, ClosedFormStrategy, Multipliers};
use proptest::prelude::*;

fn arb_house() -> impl Strategy<Value = HouseDescription> {
    let typology = proptest::sample::select(vec![
        Typology::T1,
        Typology::T2,
        Typology::T3,
        Typology::T4,
        Typology::T5,
        Typology::Unknown,
    ]);
    let coverage = proptest::sample::select(vec![
        CoverageMaterial::SheetMetal,
        CoverageMaterial::Tile,
        CoverageMaterial::Slab,
        CoverageMaterial::Unknown,
    ]);
    let foundation = proptest::sample::select(vec![
        FoundationType::Simple,
        FoundationType::Deep,
        FoundationType::Superficial,
        FoundationType::Unknown,
    ]);
    let wall = proptest::sample::select(vec![
        WallMaterial::Block,
        WallMaterial::Brick,
        WallMaterial::Adobe,
        WallMaterial::Unknown,
    ]);
    let habitation = proptest::sample::select(vec![
        HabitationStyle::Traditional,
        HabitationStyle::Conventional,
        HabitationStyle::Modern,
        HabitationStyle::Unknown,
    ]);
    (
        -10.0f64..2_000.0,
        -2i64..5,
        proptest::option::of(1950i32..2100),
        typology,
        coverage,
        foundation,
        wall,
        habitation,
    )
        .prop_map(
            |(area, floors, construction_year, typology, coverage, foundation, wall, habitation)| {
                HouseDescription {
                    area,
                    floors,
                    construction_year,
                    typology,
                    coverage,
                    foundation,
                    wall,
                    habitation,
                    ..HouseDescription::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn closed_form_total_is_whole_and_non_negative(house in arb_house()) {
        let total = ClosedFormStrategy::default().total(&house, 2026).unwrap();
        prop_assert!(total >= 0.0);
        prop_assert_eq!(total, total.round());
    }

    #[test]
    fn closed_form_is_deterministic(house in arb_house()) {
        let strategy = ClosedFormStrategy::default();
        prop_assert_eq!(
            strategy.total(&house, 2026).unwrap(),
            strategy.total(&house, 2026).unwrap()
        );
    }

    #[test]
    fn closed_form_result_keeps_invariants(house in arb_house()) {
        let total = ClosedFormStrategy::default().total(&house, 2026).unwrap();
        let result = BreakdownPolicy::CLOSED_FORM.apply(total);
        prop_assert!((result.breakdown.sum() - total).abs() <= 1e-9 * total.max(1.0));
        prop_assert!(result.range.min <= total && total <= result.range.max);
    }

    #[test]
    fn multipliers_stay_in_table_range(house in arb_house()) {
        let m = Multipliers::for_house(&house);
        for value in [m.typology, m.coverage, m.foundation, m.wall, m.habitation] {
            prop_assert!((0.8..=1.8).contains(&value));
        }
    }

    #[test]
    fn age_factor_never_below_floor(year in 1800i32..2200, now in 1900i32..2100) {
        prop_assert!(age_factor(year, now) >= 0.8);
    }
}
