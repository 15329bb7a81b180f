//! # obra-report
//!
//! Turns an [`EstimationResult`](obra_core::EstimationResult) or a
//! [`Comparison`](obra_core::Comparison) into something a person reads:
//! a fixed-layout A4 PDF, a plain-text rendition, and share text.

pub mod format;
pub mod layout;
pub mod pdf;
pub mod share;

pub use format::{format_mzn, safe_display};
pub use layout::{render_text, ReportLayout, ReportLine, Rgb};
pub use pdf::{render_pdf, write_pdf};
pub use share::{share, Clipboard, ShareOutcome, SharePayload, ShareSheet};
