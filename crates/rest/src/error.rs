//! Error types for the Todo Manager REST API.
//!
//! Every failure is reported as a status code plus a list of messages in
//! the error envelope (`{"errorMessages": [...]}`).
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | Validation (any) | 400 |
//! | Resource NotFound / NoMatchingInstances | 404 |
//! | Relationship NoSuchParent / NoSuchTarget | 404 |
//! | Relationship InvalidPayload | 400 |

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todo_persistence::error::{RelationshipError, StorageError};

use crate::codec::MediaFormat;
use crate::config::LEGACY_INTERNAL_ERROR;
use crate::responses::format::error_response;

/// The primary error type for REST API operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestError {
    /// Entity, link or route not found (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Bad request - validation or malformed body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Request body exceeds the configured limit (HTTP 413).
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

/// The messages of an error response.
///
/// Attached to every error response as an extension so that
/// [`negotiate_errors`](crate::middleware::negotiate_errors) can re-render
/// it in the negotiated format.
#[derive(Debug, Clone)]
pub struct ErrorMessages(pub Vec<String>);

impl RestError {
    /// 404 for a path that names nothing.
    pub fn no_instance(path: impl fmt::Display) -> Self {
        RestError::NotFound {
            message: format!("Could not find an instance with {}", path),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts a relationship failure, optionally reporting the unusable
    /// payload case the way the legacy service did.
    pub fn from_relationship(err: StorageError, legacy: bool) -> Self {
        match err {
            StorageError::Relationship(RelationshipError::InvalidPayload { .. }) if legacy => {
                RestError::legacy()
            }
            other => other.into(),
        }
    }

    /// The leaked internal failure reported by the legacy service.
    pub fn legacy() -> Self {
        RestError::BadRequest {
            message: LEGACY_INTERNAL_ERROR.to_string(),
        }
    }

    /// Renders this error in a specific format.
    pub fn into_response_as(self, format: MediaFormat) -> Response {
        let status = self.status_code();
        error_response(status, &[self.to_string()], format)
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { message }
            | RestError::BadRequest { message }
            | RestError::PayloadTooLarge { message }
            | RestError::InternalError { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.into_response_as(MediaFormat::Json)
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        match err {
            StorageError::Validation(_) => RestError::BadRequest { message },
            StorageError::Resource(_) => RestError::NotFound { message },
            StorageError::Relationship(RelationshipError::InvalidPayload { .. }) => {
                RestError::BadRequest { message }
            }
            StorageError::Relationship(_) => RestError::NotFound { message },
        }
    }
}

impl From<crate::codec::CodecError> for RestError {
    fn from(err: crate::codec::CodecError) -> Self {
        match err {
            crate::codec::CodecError::Write(e) => RestError::InternalError {
                message: e.to_string(),
            },
            other => RestError::BadRequest {
                message: other.to_string(),
            },
        }
    }
}

/// Result type for REST operations.
pub type RestResult<T> = Result<T, RestError>;
