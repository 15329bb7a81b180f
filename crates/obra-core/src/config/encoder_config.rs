use serde::{Deserialize, Serialize};

/// How roof coverage is turned into its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoverageEncoding {
    /// sheet-metal 0, tile 1, slab 2.
    #[default]
    Distinct,
    /// sheet-metal 0, tile and slab both 1.
    Collapsed,
}

/// Feature encoder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub coverage_encoding: CoverageEncoding,
}
