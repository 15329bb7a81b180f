//! Minimal single-page PDF writer for [`ReportLayout`].
//!
//! Emits PDF 1.4 with one A4 page, the built-in Helvetica font, and
//! WinAnsi-encoded text. Characters outside WinAnsi become `?`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use obra_core::errors::{ObraResult, ReportError};
use tracing::info;

use crate::layout::{ReportLayout, ReportLine, Rgb};

const PAGE_WIDTH_PT: f32 = 595.28;
const PAGE_HEIGHT_PT: f32 = 841.89;
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Render `layout` to PDF bytes.
pub fn render_pdf(layout: &ReportLayout) -> Vec<u8> {
    let content = content_stream(&layout.lines);

    let objects: Vec<Vec<u8>> = vec![
        b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH_PT} {PAGE_HEIGHT_PT}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
        )
        .into_bytes(),
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_vec(),
        {
            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(&content);
            stream.extend_from_slice(b"\nendstream");
            stream
        },
    ];

    let mut out = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_at = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        let _ = writeln!(xref, "{offset:010} 00000 n ");
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    );
    out.extend_from_slice(xref.as_bytes());
    out
}

/// Render `layout` and write it into `dir` under the layout's file name.
pub fn write_pdf(layout: &ReportLayout, dir: &Path) -> ObraResult<PathBuf> {
    let path = dir.join(&layout.file_name);
    fs::write(&path, render_pdf(layout)).map_err(ReportError::from)?;
    info!(path = %path.display(), "report written");
    Ok(path)
}

fn content_stream(lines: &[ReportLine]) -> Vec<u8> {
    let mut out = Vec::new();
    for line in lines {
        let Rgb(r, g, b) = line.color;
        let x = line.x_mm * PT_PER_MM;
        let y = PAGE_HEIGHT_PT - line.y_mm * PT_PER_MM;
        out.extend_from_slice(
            format!(
                "BT /F1 {} Tf {:.3} {:.3} {:.3} rg {x:.2} {y:.2} Td (",
                line.size,
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            )
            .as_bytes(),
        );
        out.extend_from_slice(&escape_text(&line.text));
        out.extend_from_slice(b") Tj ET\n");
    }
    out
}

/// Encode to WinAnsi and escape for a PDF literal string. Bytes above
/// ASCII are written as octal escapes so the stream stays 7-bit.
fn escape_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match win_ansi(ch) {
            b @ (b'(' | b')' | b'\\') => {
                out.push(b'\\');
                out.push(b);
            }
            b if b.is_ascii() && !b.is_ascii_control() => out.push(b),
            b => out.extend_from_slice(format!("\\{b:03o}").as_bytes()),
        }
    }
    out
}

fn win_ansi(ch: char) -> u8 {
    match ch {
        '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => ch as u8,
        '€' => 0x80,
        '…' => 0x85,
        '•' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        _ => b'?',
    }
}
