/// Report export and share errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("share failed: {reason}")]
    ShareFailed { reason: String },
}
