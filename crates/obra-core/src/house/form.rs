//! Raw form input, as the estimate screen submits it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::categories::{
    CoverageMaterial, FoundationType, HabitationStyle, QualityTier, Typology, WallMaterial,
};
use super::lenient::{parse_int, parse_real};
use super::HouseDescription;

/// Unparsed house form. Every field is kept as text.
///
/// Deserializes from either the English field names or the Portuguese
/// form keys (`quartos`, `pisos`, `cobertura`, ...). Values may be strings
/// or numbers; `null`, booleans and nested values read as empty text.
/// Missing fields take the estimate screen's initial values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HouseForm {
    #[serde(alias = "quartos", deserialize_with = "text_or_number")]
    pub bedrooms: String,
    #[serde(alias = "pisos", deserialize_with = "text_or_number")]
    pub floors: String,
    #[serde(deserialize_with = "text_or_number")]
    pub area: String,
    #[serde(alias = "paredes", alias = "wallType", deserialize_with = "text_or_number")]
    pub wall: String,
    #[serde(alias = "cobertura", alias = "coverageType", deserialize_with = "text_or_number")]
    pub coverage: String,
    #[serde(alias = "fundacao", alias = "foundationType", deserialize_with = "text_or_number")]
    pub foundation: String,
    #[serde(alias = "padraoCasa", deserialize_with = "text_or_number")]
    pub quality: String,
    #[serde(alias = "tipoCasa", deserialize_with = "text_or_number")]
    pub house_type_code: String,
    #[serde(alias = "duracao", deserialize_with = "text_or_number")]
    pub duration_months: String,
    #[serde(alias = "houseType", deserialize_with = "text_or_number")]
    pub typology: String,
    #[serde(alias = "habitationType", deserialize_with = "text_or_number")]
    pub habitation: String,
    #[serde(deserialize_with = "text_or_number")]
    pub year: String,
}

impl Default for HouseForm {
    fn default() -> Self {
        Self {
            bedrooms: "1".to_string(),
            floors: "1".to_string(),
            area: "20".to_string(),
            wall: "bloco".to_string(),
            coverage: "chapa".to_string(),
            foundation: "simples".to_string(),
            quality: "medio".to_string(),
            house_type_code: "0".to_string(),
            duration_months: "6".to_string(),
            typology: "T2".to_string(),
            habitation: "convencional".to_string(),
            year: String::new(),
        }
    }
}

impl HouseForm {
    /// Resolve every field. Never fails: malformed numbers become 0 and
    /// unknown categories become `Unknown`. A year that parses to 0 is
    /// treated as absent.
    pub fn parse(&self) -> HouseDescription {
        let year = parse_int(&self.year);
        HouseDescription {
            bedrooms: parse_int(&self.bedrooms),
            floors: parse_int(&self.floors),
            area: parse_real(&self.area),
            wall: WallMaterial::parse(&self.wall),
            coverage: CoverageMaterial::parse(&self.coverage),
            foundation: FoundationType::parse(&self.foundation),
            quality: QualityTier::parse(&self.quality),
            house_type_code: parse_int(&self.house_type_code),
            duration_months: parse_int(&self.duration_months),
            typology: Typology::parse(&self.typology),
            habitation: HabitationStyle::parse(&self.habitation),
            construction_year: i32::try_from(year).ok().filter(|y| *y != 0),
        }
    }
}

/// Accept a string or a number as form text. Anything else is empty, which
/// later parses to zero or an unknown category.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}
