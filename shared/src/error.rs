use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Resource not found")]
    NotFound,
    #[error("User not initialized")]
    UserNotInitialized,
    #[error("Remote store unavailable")]
    RemoteUnavailable,
    #[error("Local storage unavailable")]
    StorageUnavailable,
    #[error("Validation failed")]
    ValidationFailed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn remote(message: impl Into<String>, details: impl fmt::Display) -> Self {
        Self::with_details(ErrorCode::RemoteUnavailable, message, details.to_string())
    }

    pub fn storage(message: impl Into<String>, details: impl fmt::Display) -> Self {
        Self::with_details(ErrorCode::StorageUnavailable, message, details.to_string())
    }

    /// Whether the caller should offer the user a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self.code, ErrorCode::RemoteUnavailable | ErrorCode::StorageUnavailable)
    }
}

impl From<crate::validation::ValidationError> for Error {
    fn from(err: crate::validation::ValidationError) -> Self {
        Self::with_details(ErrorCode::ValidationFailed, "Vote rejected", err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
