//! Upload Error Types
//!
//! This module provides upload-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Upload-specific result type alias
pub type UploadResult<T> = Result<T, UploadError>;

/// Upload-specific error variants
#[derive(Debug, Error)]
pub enum UploadError {
    /// Request carried no file under the expected field
    #[error("No file uploaded")]
    NoFileProvided,

    /// MIME type outside the allow-list
    #[error("Invalid file type. Only JPEG and PNG are allowed.")]
    InvalidFileType(String),

    /// File exceeds the size cap
    #[error("File is too large. The maximum size is {max_bytes} bytes.")]
    PayloadTooLarge { max_bytes: usize },

    /// Malformed multipart body
    #[error("Invalid upload request: {0}")]
    Multipart(#[from] MultipartError),

    /// Disk write failure
    #[error("Failed to store file: {0}")]
    Storage(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UploadError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::NoFileProvided
            | UploadError::InvalidFileType(_)
            | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
            UploadError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Storage(_) | UploadError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UploadError::NoFileProvided
            | UploadError::InvalidFileType(_)
            | UploadError::Multipart(_) => ErrorKind::BadRequest,
            UploadError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            UploadError::Storage(_) | UploadError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UploadError::Storage(e) => {
                tracing::error!(error = %e, "Upload storage error");
            }
            UploadError::Internal(msg) => {
                tracing::error!(message = %msg, "Upload internal error");
            }
            UploadError::InvalidFileType(mime) => {
                tracing::warn!(mime = %mime, "Rejected upload with disallowed type");
            }
            _ => {
                tracing::debug!(error = %self, "Upload error");
            }
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
