//! Sharing a report: platform share sheet when it accepts the payload,
//! clipboard otherwise.

use obra_core::errors::ObraResult;
use obra_core::house::{CoverageMaterial, HouseDescription};
use obra_core::models::{Comparison, EstimationResult};
use serde::Serialize;
use tracing::debug;

use crate::format::{format_mzn, safe_display};

/// What gets shared. The share sheet receives `title` and `text`; the
/// clipboard receives `clipboard_text`, which stands on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub clipboard_text: String,
}

impl SharePayload {
    pub fn estimate(result: &EstimationResult) -> Self {
        let details = format!(
            "Detalhamento:\n\
             • Fundação: {}\n\
             • Paredes: {}\n\
             • Cobertura: {}\n\
             • Acabamentos: {}",
            safe_display(Some(result.breakdown.foundation)),
            safe_display(Some(result.breakdown.walls)),
            safe_display(Some(result.breakdown.coverage)),
            safe_display(Some(result.breakdown.finishes)),
        );
        let total = format_mzn(result.total);
        Self {
            title: "Estimativa de Custo Residencial".to_string(),
            text: format!("Custo Total Estimado: {total}\n\n{details}"),
            clipboard_text: format!(
                "Estimativa de Custo Residencial\n\n\
                 Custo Total: {total}\n\n\
                 {details}\n\n\
                 Gerado pelo Sistema de Estimativa de Custo Residencial"
            ),
        }
    }

    /// Roof comparison on `base`, the house both coverages were priced on.
    pub fn comparison(
        base: &HouseDescription,
        first: CoverageMaterial,
        second: CoverageMaterial,
        comparison: &Comparison,
    ) -> Self {
        let text = format!(
            "🏠 COMPARAÇÃO DE COBERTURAS\n\n\
             📌 Base: {}\n\
             🔩 {}: {}\n\
             🔩 {}: {}\n\n\
             💸 Diferença: {} ({})\n\n\
             Gerado por Sistema de Estimativa v{}",
            base_summary(base),
            first.label().to_uppercase(),
            format_mzn(comparison.first.total),
            second.label().to_uppercase(),
            format_mzn(comparison.second.total),
            format_mzn(comparison.difference),
            comparison.percentage_display(),
            obra_core::constants::VERSION,
        );
        Self {
            title: "Comparação de Cobertura".to_string(),
            clipboard_text: text.clone(),
            text,
        }
    }
}

/// `T2 | 40m² | 1 Piso | Padrão Médio`.
fn base_summary(base: &HouseDescription) -> String {
    let floors = if base.floors == 1 {
        "1 Piso".to_string()
    } else {
        format!("{} Pisos", base.floors)
    };
    format!(
        "{} | {}m² | {floors} | Padrão {}",
        base.typology.label(),
        base.area,
        base.quality.label()
    )
}

/// Platform share sheet.
pub trait ShareSheet {
    fn can_share(&self, payload: &SharePayload) -> bool;

    fn share(&self, payload: &SharePayload) -> ObraResult<()>;
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> ObraResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    CopiedToClipboard,
}

/// Share `payload` through `sheet` if present and willing, else copy the
/// clipboard text.
pub fn share(
    payload: &SharePayload,
    sheet: Option<&dyn ShareSheet>,
    clipboard: &dyn Clipboard,
) -> ObraResult<ShareOutcome> {
    match sheet {
        Some(sheet) if sheet.can_share(payload) => {
            sheet.share(payload)?;
            debug!(title = %payload.title, "shared via share sheet");
            Ok(ShareOutcome::Shared)
        }
        _ => {
            clipboard.write_text(&payload.clipboard_text)?;
            debug!(title = %payload.title, "copied to clipboard");
            Ok(ShareOutcome::CopiedToClipboard)
        }
    }
}
