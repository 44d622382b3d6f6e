//! Error types for bizcard

use thiserror::Error;

/// Main error type for card generation and export
#[derive(Error, Debug)]
pub enum CardError {
    /// Profile cannot produce an artifact (e.g. empty name)
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Local photo read or remote photo fetch failed
    #[error("Photo read failed: {0}")]
    PhotoReadFailure(String),

    /// Host has no native share mechanism
    #[error("Native share is not available")]
    ShareUnavailable,

    /// Native share was cancelled or rejected
    #[error("Native share was cancelled")]
    ShareCancelled,

    /// Blob, document, or host action failed
    #[error("Export failed: {0}")]
    ExportFailure(String),

    /// Payload could not be encoded as a QR code
    #[error("QR encoding failed: {0}")]
    CodeEncoding(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document template rendering error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl CardError {
    /// Share failures that resolve to the document-open fallback.
    pub fn is_share_fallback(&self) -> bool {
        matches!(self, CardError::ShareUnavailable | CardError::ShareCancelled)
    }
}

impl From<qrcode::types::QrError> for CardError {
    fn from(err: qrcode::types::QrError) -> Self {
        CardError::CodeEncoding(err.to_string())
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
