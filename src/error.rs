//! Error types
//!
//! Only document-backend faults can surface from rendering. Missing or invalid
//! input data is absorbed by the models and calculators instead.

use thiserror::Error;

/// Report engine error types
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF backend error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
