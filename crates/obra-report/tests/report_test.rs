use std::cell::RefCell;

use chrono::NaiveDate;
use obra_core::errors::{ObraResult, ReportError};
use obra_core::house::{CoverageMaterial, HouseDescription, QualityTier, Typology};
use obra_core::models::{BreakdownPolicy, Comparison};
use obra_core::ObraError;
use obra_report::{
    render_pdf, share, write_pdf, Clipboard, ReportLayout, ShareOutcome, SharePayload, ShareSheet,
};

// ── Fakes ─────────────────────────────────────────────────────────────────

struct Sheet {
    accepts: bool,
    fails: bool,
    shared: RefCell<Vec<SharePayload>>,
}

impl Sheet {
    fn new(accepts: bool) -> Self {
        Self {
            accepts,
            fails: false,
            shared: RefCell::new(Vec::new()),
        }
    }
}

impl ShareSheet for Sheet {
    fn can_share(&self, _payload: &SharePayload) -> bool {
        self.accepts
    }

    fn share(&self, payload: &SharePayload) -> ObraResult<()> {
        if self.fails {
            return Err(ReportError::ShareFailed {
                reason: "dismissed".to_string(),
            }
            .into());
        }
        self.shared.borrow_mut().push(payload.clone());
        Ok(())
    }
}

#[derive(Default)]
struct Board(RefCell<Option<String>>);

impl Clipboard for Board {
    fn write_text(&self, text: &str) -> ObraResult<()> {
        *self.0.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()
}

// ── PDF ───────────────────────────────────────────────────────────────────

#[test]
fn estimate_pdf_contains_encoded_lines() {
    let result = BreakdownPolicy::CLOSED_FORM.apply(260_000.0);
    let pdf = render_pdf(&ReportLayout::estimate(&result, date()));

    assert!(pdf.starts_with(b"%PDF-1.4"));
    assert!(pdf.ends_with(b"%%EOF\n"));
    let body = String::from_utf8_lossy(&pdf);
    assert!(body.contains("/BaseFont /Helvetica"));
    assert!(body.contains("(Custo Total) Tj"));
    assert!(body.contains("(Data: 30/11/2025) Tj"));
    assert!(body.contains("(260 000 MZN) Tj"));
    // "Funda\347\343o:" in WinAnsi octal escapes.
    assert!(body.contains("(Funda\\347\\343o:) Tj"));
}

#[test]
fn write_pdf_uses_layout_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let result = BreakdownPolicy::MODEL_BACKED.apply(150_000.0);
    let layout = ReportLayout::estimate(&result, date());

    let path = write_pdf(&layout, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "estimativa-custo-2025-11-30.pdf");
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, render_pdf(&layout));
}

#[test]
fn write_pdf_into_missing_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let layout = ReportLayout::estimate(&BreakdownPolicy::CLOSED_FORM.apply(1.0), date());
    let err = write_pdf(&layout, &dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, ObraError::Report(ReportError::Io(_))));
}

// ── Share ─────────────────────────────────────────────────────────────────

#[test]
fn share_prefers_willing_sheet() {
    let payload = SharePayload::estimate(&BreakdownPolicy::CLOSED_FORM.apply(260_000.0));
    let sheet = Sheet::new(true);
    let board = Board::default();

    let outcome = share(&payload, Some(&sheet), &board).unwrap();

    assert_eq!(outcome, ShareOutcome::Shared);
    assert_eq!(sheet.shared.borrow().len(), 1);
    assert!(board.0.borrow().is_none());
    assert!(payload.text.starts_with("Custo Total Estimado: 260 000 MZN"));
    assert!(payload.text.contains("• Acabamentos: 104K MZN"));
}

#[test]
fn share_falls_back_to_clipboard() {
    let payload = SharePayload::estimate(&BreakdownPolicy::CLOSED_FORM.apply(260_000.0));
    let board = Board::default();

    let refused = Sheet::new(false);
    assert_eq!(
        share(&payload, Some(&refused), &board).unwrap(),
        ShareOutcome::CopiedToClipboard
    );
    assert_eq!(
        share(&payload, None, &board).unwrap(),
        ShareOutcome::CopiedToClipboard
    );

    let copied = board.0.borrow().clone().unwrap();
    assert!(copied.starts_with("Estimativa de Custo Residencial\n\nCusto Total: 260 000 MZN"));
    assert!(copied.ends_with("Gerado pelo Sistema de Estimativa de Custo Residencial"));
}

#[test]
fn share_sheet_failure_propagates() {
    let payload = SharePayload::estimate(&BreakdownPolicy::CLOSED_FORM.apply(1_000.0));
    let mut sheet = Sheet::new(true);
    sheet.fails = true;
    let board = Board::default();

    let err = share(&payload, Some(&sheet), &board).unwrap_err();
    assert!(matches!(err, ObraError::Report(ReportError::ShareFailed { .. })));
    assert!(board.0.borrow().is_none());
}

#[test]
fn comparison_share_text() {
    let c = Comparison::new(
        BreakdownPolicy::CLOSED_FORM.apply(200_000.0),
        BreakdownPolicy::CLOSED_FORM.apply(260_000.0),
    );
    let payload = SharePayload::comparison(
        &HouseDescription::comparison_baseline(),
        CoverageMaterial::SheetMetal,
        CoverageMaterial::Tile,
        &c,
    );
    assert_eq!(payload.title, "Comparação de Cobertura");
    assert!(payload.text.contains("Base: T2 | 40m² | 1 Piso | Padrão Médio"));
    assert!(payload.text.contains("CHAPA: 200 000 MZN"));
    assert!(payload.text.contains("TELHA: 260 000 MZN"));
    assert!(payload.text.contains("Diferença: 60 000 MZN (30.0%)"));
    assert_eq!(payload.text, payload.clipboard_text);
}

#[test]
fn comparison_share_text_describes_given_base() {
    let base = HouseDescription {
        typology: Typology::T4,
        area: 120.5,
        floors: 2,
        quality: QualityTier::High,
        ..HouseDescription::comparison_baseline()
    };
    let c = Comparison::new(
        BreakdownPolicy::CLOSED_FORM.apply(300_000.0),
        BreakdownPolicy::CLOSED_FORM.apply(390_000.0),
    );
    let payload = SharePayload::comparison(&base, CoverageMaterial::SheetMetal, CoverageMaterial::Tile, &c);
    assert!(payload.text.contains("Base: T4 | 120.5m² | 2 Pisos | Padrão Alto"));
    assert!(!payload.text.contains("40m²"));
}
