use obra_core::house::*;

#[test]
fn default_form_matches_estimate_screen() {
    let house = HouseForm::default().parse();
    assert_eq!(house.bedrooms, 1);
    assert_eq!(house.floors, 1);
    assert_eq!(house.area, 20.0);
    assert_eq!(house.wall, WallMaterial::Block);
    assert_eq!(house.coverage, CoverageMaterial::SheetMetal);
    assert_eq!(house.foundation, FoundationType::Simple);
    assert_eq!(house.quality, QualityTier::Medium);
    assert_eq!(house.house_type_code, 0);
    assert_eq!(house.duration_months, 6);
    assert_eq!(house.typology, Typology::T2);
    assert_eq!(house.habitation, HabitationStyle::Conventional);
    assert_eq!(house.construction_year, None);
}

#[test]
fn form_accepts_portuguese_keys() {
    let json = r#"{
        "quartos": "3",
        "duracao": "12",
        "pisos": "2",
        "padraoCasa": "alto",
        "cobertura": "laje",
        "tipoCasa": "1",
        "fundacao": "profunda",
        "paredes": "tijolo",
        "area": "85.5"
    }"#;
    let form: HouseForm = serde_json::from_str(json).unwrap();
    let house = form.parse();
    assert_eq!(house.bedrooms, 3);
    assert_eq!(house.duration_months, 12);
    assert_eq!(house.floors, 2);
    assert_eq!(house.quality, QualityTier::High);
    assert_eq!(house.coverage, CoverageMaterial::Slab);
    assert_eq!(house.house_type_code, 1);
    assert_eq!(house.foundation, FoundationType::Deep);
    assert_eq!(house.wall, WallMaterial::Brick);
    assert_eq!(house.area, 85.5);
    // Unspecified fields keep defaults.
    assert_eq!(house.typology, Typology::T2);
}

#[test]
fn form_accepts_fallback_predictor_keys() {
    let json = r#"{
        "houseType": "T4",
        "year": "2030",
        "habitationType": "moderna",
        "coverageType": "telha",
        "foundationType": "superficial",
        "wallType": "adobe"
    }"#;
    let house = serde_json::from_str::<HouseForm>(json).unwrap().parse();
    assert_eq!(house.typology, Typology::T4);
    assert_eq!(house.construction_year, Some(2030));
    assert_eq!(house.habitation, HabitationStyle::Modern);
    assert_eq!(house.coverage, CoverageMaterial::Tile);
    assert_eq!(house.foundation, FoundationType::Superficial);
    assert_eq!(house.wall, WallMaterial::Adobe);
}

#[test]
fn form_accepts_numeric_values() {
    let json = r#"{
        "quartos": 2,
        "area": 40,
        "pisos": 1,
        "duracao": 6.0,
        "tipoCasa": 0,
        "year": 2024,
        "cobertura": "telha"
    }"#;
    let house = serde_json::from_str::<HouseForm>(json).unwrap().parse();
    assert_eq!(house.bedrooms, 2);
    assert_eq!(house.area, 40.0);
    assert_eq!(house.floors, 1);
    assert_eq!(house.duration_months, 6);
    assert_eq!(house.house_type_code, 0);
    assert_eq!(house.construction_year, Some(2024));
    assert_eq!(house.coverage, CoverageMaterial::Tile);
}

#[test]
fn form_reads_null_and_odd_values_as_empty() {
    let json = r#"{
        "quartos": null,
        "area": true,
        "pisos": [1],
        "cobertura": 3,
        "fundacao": {"tipo": "simples"}
    }"#;
    let house = serde_json::from_str::<HouseForm>(json).unwrap().parse();
    assert_eq!(house.bedrooms, 0);
    assert_eq!(house.area, 0.0);
    assert_eq!(house.floors, 0);
    assert_eq!(house.coverage, CoverageMaterial::Unknown);
    assert_eq!(house.foundation, FoundationType::Unknown);
}

#[test]
fn malformed_numbers_become_zero() {
    let form = HouseForm {
        bedrooms: "dois".to_string(),
        area: "".to_string(),
        floors: "x1".to_string(),
        duration_months: "meio ano".to_string(),
        house_type_code: "?".to_string(),
        year: "ontem".to_string(),
        ..HouseForm::default()
    };
    let house = form.parse();
    assert_eq!(house.bedrooms, 0);
    assert_eq!(house.area, 0.0);
    assert_eq!(house.floors, 0);
    assert_eq!(house.duration_months, 0);
    assert_eq!(house.house_type_code, 0);
    assert_eq!(house.construction_year, None);
}

#[test]
fn with_coverage_changes_only_coverage() {
    let base = HouseDescription::comparison_baseline();
    let tiled = base.with_coverage(CoverageMaterial::Tile);
    assert_eq!(tiled.coverage, CoverageMaterial::Tile);
    assert_eq!(tiled.with_coverage(CoverageMaterial::SheetMetal), base);
}
