//! Service layer error types
//!
//! Classifies HTTP boundary failures so callers can tell a transport problem
//! (backend unreachable, timeout) from the backend rejecting a request.

use armory_shared::ErrorCode;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Request never got an answer
    #[error("Request error: {0}")]
    Transport(String),
    /// Server returned an error response
    #[error("Server error ({code:?}): {message}")]
    ServerError { code: ErrorCode, message: String },
    /// Failed to parse response data
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::HttpError { status, message } => ServiceError::ServerError {
                code: ErrorCode::from_status(status),
                message,
            },
            ApiError::ParseError(msg) => ServiceError::ParseError(msg),
            ApiError::RequestFailed(msg)
            | ApiError::SerializeError(msg)
            | ApiError::InvalidUrl(msg) => ServiceError::Transport(msg),
        }
    }
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::ServerError {
                code: ErrorCode::NotFound,
                ..
            }
        )
    }

    /// The backend answered and refused the request
    pub fn is_server_rejection(&self) -> bool {
        matches!(self, ServiceError::ServerError { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ServiceError::Transport(_))
    }
}
