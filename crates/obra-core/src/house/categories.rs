//! Categorical house attributes.
//!
//! Every category has an explicit `Unknown` variant. Parsing never fails:
//! unrecognised tokens land in `Unknown` and each consumer decides what
//! numeric value that maps to. Tokens are matched case-insensitively in
//! Portuguese (as the form submits them) and English.

use serde::{Deserialize, Serialize};
use tracing::debug;

fn normalize(token: &str) -> String {
    token.trim().to_lowercase().replace(['_', ' '], "-")
}

fn log_unknown(category: &'static str, token: &str) {
    debug!(category, token, "unknown category token, using fallback");
}

/// Wall material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallMaterial {
    Block,
    Brick,
    Adobe,
    Unknown,
}

impl WallMaterial {
    pub fn parse(token: &str) -> Self {
        match normalize(token).as_str() {
            "bloco" | "block" => Self::Block,
            "tijolo" | "brick" => Self::Brick,
            "adobe" => Self::Adobe,
            _ => {
                log_unknown("wall", token);
                Self::Unknown
            }
        }
    }
}

/// Roof coverage material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMaterial {
    SheetMetal,
    Tile,
    Slab,
    Unknown,
}

impl CoverageMaterial {
    pub fn parse(token: &str) -> Self {
        match normalize(token).as_str() {
            "chapa" | "sheet-metal" | "metal" => Self::SheetMetal,
            "telha" | "tile" => Self::Tile,
            "laje" | "slab" => Self::Slab,
            _ => {
                log_unknown("coverage", token);
                Self::Unknown
            }
        }
    }

    /// Form token, used as the label in comparison reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SheetMetal => "chapa",
            Self::Tile => "telha",
            Self::Slab => "laje",
            Self::Unknown => "desconhecida",
        }
    }
}

/// Foundation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationType {
    Simple,
    Deep,
    Superficial,
    Unknown,
}

impl FoundationType {
    pub fn parse(token: &str) -> Self {
        match normalize(token).as_str() {
            "simples" | "simple" => Self::Simple,
            "profunda" | "deep" => Self::Deep,
            "superficial" | "shallow" => Self::Superficial,
            _ => {
                log_unknown("foundation", token);
                Self::Unknown
            }
        }
    }
}

/// Construction quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Low,
    Medium,
    High,
    Unknown,
}

impl QualityTier {
    pub fn parse(token: &str) -> Self {
        match normalize(token).as_str() {
            "baixo" | "low" => Self::Low,
            "medio" | "médio" | "medium" => Self::Medium,
            "alto" | "high" => Self::High,
            _ => {
                log_unknown("quality", token);
                Self::Unknown
            }
        }
    }

    /// Display name as the estimate screen shows it.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Baixo",
            Self::Medium => "Médio",
            Self::High => "Alto",
            Self::Unknown => "N/D",
        }
    }
}

/// Dwelling typology by bedroom count (T1..T5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Typology {
    T1,
    T2,
    T3,
    T4,
    T5,
    Unknown,
}

impl Typology {
    pub fn parse(token: &str) -> Self {
        match normalize(token).as_str() {
            "t1" => Self::T1,
            "t2" => Self::T2,
            "t3" => Self::T3,
            "t4" => Self::T4,
            "t5" => Self::T5,
            _ => {
                log_unknown("typology", token);
                Self::Unknown
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::T3 => "T3",
            Self::T4 => "T4",
            Self::T5 => "T5",
            Self::Unknown => "N/D",
        }
    }
}

/// Habitation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitationStyle {
    Traditional,
    Conventional,
    Modern,
    Unknown,
}

impl HabitationStyle {
    pub fn parse(token: &str) -> Self {
        match normalize(token).as_str() {
            "tradicional" | "traditional" => Self::Traditional,
            "convencional" | "conventional" => Self::Conventional,
            "moderna" | "modern" => Self::Modern,
            _ => {
                log_unknown("habitation", token);
                Self::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_and_english_tokens_agree() {
        assert_eq!(WallMaterial::parse("bloco"), WallMaterial::parse("block"));
        assert_eq!(CoverageMaterial::parse("chapa"), CoverageMaterial::SheetMetal);
        assert_eq!(CoverageMaterial::parse("sheet_metal"), CoverageMaterial::SheetMetal);
        assert_eq!(FoundationType::parse("profunda"), FoundationType::Deep);
        assert_eq!(QualityTier::parse("médio"), QualityTier::Medium);
        assert_eq!(HabitationStyle::parse("moderna"), HabitationStyle::Modern);
    }

    #[test]
    fn matching_is_case_insensitive_and_trimmed() {
        assert_eq!(CoverageMaterial::parse("  TELHA "), CoverageMaterial::Tile);
        assert_eq!(Typology::parse("t3"), Typology::T3);
    }

    #[test]
    fn unrecognised_tokens_are_unknown() {
        assert_eq!(WallMaterial::parse("steel"), WallMaterial::Unknown);
        assert_eq!(CoverageMaterial::parse(""), CoverageMaterial::Unknown);
        assert_eq!(FoundationType::parse("pilotis"), FoundationType::Unknown);
        assert_eq!(QualityTier::parse("luxo"), QualityTier::Unknown);
        assert_eq!(Typology::parse("T9"), Typology::Unknown);
        assert_eq!(HabitationStyle::parse("?"), HabitationStyle::Unknown);
    }
}
