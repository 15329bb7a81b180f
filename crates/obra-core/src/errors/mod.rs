//! Error handling for obra.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod estimation_error;
pub mod report_error;
pub mod session_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use estimation_error::EstimationError;
pub use report_error::ReportError;
pub use session_error::SessionError;
pub use storage_error::StorageError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum ObraError {
    #[error(transparent)]
    Estimation(#[from] EstimationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Convenience alias used across the workspace.
pub type ObraResult<T> = Result<T, ObraError>;
