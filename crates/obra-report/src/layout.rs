//! Fixed textual layout of the estimate and comparison reports.
//!
//! Positions are millimetres from the top-left corner of an A4 page.

use chrono::NaiveDate;
use obra_core::house::CoverageMaterial;
use obra_core::models::{Comparison, EstimationResult};

use crate::format::{format_mzn, safe_display};

/// Comparison file name; fixed, unlike the dated estimate report.
pub const COMPARISON_FILE_NAME: &str = "comparacao-coberturas.pdf";

const LEFT_MM: f32 = 20.0;
const VALUE_COLUMN_MM: f32 = 120.0;
const BREAKDOWN_TOP_MM: f32 = 160.0;
const BREAKDOWN_STEP_MM: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const ACCENT: Self = Self(128, 90, 213);
    pub const MUTED: Self = Self(100, 100, 100);
    pub const BLACK: Self = Self(0, 0, 0);
}

/// One positioned run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    /// Font size in points.
    pub size: f32,
    pub x_mm: f32,
    pub y_mm: f32,
    pub color: Rgb,
}

/// Everything needed to render a report, independent of output format.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub lines: Vec<ReportLine>,
    pub file_name: String,
}

impl ReportLayout {
    /// Estimate report: title, date, total, range, and the four cost
    /// categories.
    pub fn estimate(result: &EstimationResult, date: NaiveDate) -> Self {
        let mut lines = vec![
            line("Relatório de Estimativa", 20.0, 30.0, Rgb::ACCENT),
            line("de Custo Residencial", 20.0, 45.0, Rgb::ACCENT),
            line(
                &format!("Data: {}", date.format("%d/%m/%Y")),
                10.0,
                55.0,
                Rgb::MUTED,
            ),
            line("Custo Total", 16.0, 75.0, Rgb::BLACK),
            line(&format_mzn(result.total), 24.0, 90.0, Rgb::ACCENT),
            line("Faixa de Valores:", 12.0, 105.0, Rgb::BLACK),
            line(
                &format!("Mínimo: {}", safe_display(Some(result.range.min))),
                12.0,
                115.0,
                Rgb::BLACK,
            ),
            line(
                &format!("Máximo: {}", safe_display(Some(result.range.max))),
                12.0,
                125.0,
                Rgb::BLACK,
            ),
            line("Detalhamento dos Custos", 16.0, 145.0, Rgb::BLACK),
        ];

        let items = [
            ("Fundação", result.breakdown.foundation),
            ("Levantamento de Paredes", result.breakdown.walls),
            ("Cobertura", result.breakdown.coverage),
            ("Acabamentos", result.breakdown.finishes),
        ];
        let mut y = BREAKDOWN_TOP_MM;
        for (name, value) in items {
            lines.push(line(&format!("{name}:"), 12.0, y, Rgb::BLACK));
            lines.push(ReportLine {
                x_mm: VALUE_COLUMN_MM,
                ..line(&safe_display(Some(value)), 12.0, y, Rgb::BLACK)
            });
            y += BREAKDOWN_STEP_MM;
        }

        Self {
            lines,
            file_name: estimate_file_name(date),
        }
    }

    /// Coverage comparison report: both totals and their difference.
    pub fn comparison(
        first: CoverageMaterial,
        second: CoverageMaterial,
        comparison: &Comparison,
    ) -> Self {
        let lines = vec![
            line(
                "Relatório de Comparação de Coberturas",
                18.0,
                30.0,
                Rgb::ACCENT,
            ),
            line(
                &total_line(first, comparison.first.total),
                12.0,
                50.0,
                Rgb::BLACK,
            ),
            line(
                &total_line(second, comparison.second.total),
                12.0,
                60.0,
                Rgb::BLACK,
            ),
            line(
                &format!(
                    "Diferença: {} ({})",
                    format_mzn(comparison.difference),
                    comparison.percentage_display()
                ),
                12.0,
                80.0,
                Rgb::BLACK,
            ),
        ];
        Self {
            lines,
            file_name: COMPARISON_FILE_NAME.to_string(),
        }
    }
}

/// `estimativa-custo-YYYY-MM-DD.pdf`.
pub fn estimate_file_name(date: NaiveDate) -> String {
    format!("estimativa-custo-{}.pdf", date.format("%Y-%m-%d"))
}

/// Plain-text rendition: one line per positioned run, top to bottom.
/// Runs sharing a baseline are joined with a space.
pub fn render_text(layout: &ReportLayout) -> String {
    let mut rows: Vec<(f32, String)> = Vec::new();
    for l in &layout.lines {
        match rows.last_mut() {
            Some((y, text)) if (*y - l.y_mm).abs() < f32::EPSILON => {
                text.push(' ');
                text.push_str(&l.text);
            }
            _ => rows.push((l.y_mm, l.text.clone())),
        }
    }
    let mut out = rows
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

fn total_line(coverage: CoverageMaterial, total: f64) -> String {
    format!(
        "{}: {}",
        coverage.label().to_uppercase(),
        format_mzn(total)
    )
}

fn line(text: &str, size: f32, y_mm: f32, color: Rgb) -> ReportLine {
    ReportLine {
        text: text.to_string(),
        size,
        x_mm: LEFT_MM,
        y_mm,
        color,
    }
}
