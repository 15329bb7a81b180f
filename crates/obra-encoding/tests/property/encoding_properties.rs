use obra_core::config::CoverageEncoding;
use obra_core::house::HouseForm;
use obra_encoding::FeatureEncoder;
use proptest::prelude::*;

fn arb_form() -> impl Strategy<Value = HouseForm> {
    let category = prop_oneof![
        proptest::sample::select(vec![
            "bloco", "tijolo", "chapa", "telha", "laje", "simples", "profunda", "baixo",
            "medio", "alto",
        ])
        .prop_map(str::to_string),
        ".{0,12}",
    ];
    (
        (".{0,8}", ".{0,8}", ".{0,8}", ".{0,8}", ".{0,8}"),
        (category.clone(), category.clone(), category.clone(), category),
    )
        .prop_map(
            |((bedrooms, floors, area, duration_months, house_type_code), (wall, coverage, foundation, quality))| {
                HouseForm {
                    bedrooms,
                    floors,
                    area,
                    duration_months,
                    house_type_code,
                    wall,
                    coverage,
                    foundation,
                    quality,
                    ..HouseForm::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn encoding_is_deterministic(form in arb_form()) {
        let encoder = FeatureEncoder::default();
        prop_assert_eq!(encoder.encode_form(&form), encoder.encode_form(&form));
    }

    #[test]
    fn arbitrary_input_never_panics_and_stays_finite(form in arb_form()) {
        for encoding in [CoverageEncoding::Distinct, CoverageEncoding::Collapsed] {
            let v = FeatureEncoder::with_coverage_encoding(encoding).encode_form(&form);
            prop_assert_eq!(v.values().len(), 9);
            prop_assert!(v.values().iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn categorical_columns_stay_in_their_tables(form in arb_form()) {
        let v = FeatureEncoder::default().encode_form(&form);
        let values = v.values();
        prop_assert!([0.0, 1.0, 2.0].contains(&values[3]));
        prop_assert!([0.0, 1.0].contains(&values[4]));
        prop_assert!([0.0, 1.0].contains(&values[6]));
        prop_assert!([0.0, 3.0, 7.0, 9.0].contains(&values[8]));
    }
}
