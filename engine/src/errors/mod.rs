//! Global application error types.
//!
//! This module defines the error contract between the login flow and its
//! collaborators. Validation failures and remote rejections are surfaced as
//! view states, never as errors; the types here cover authenticator-level
//! faults and misuse of the flow itself.

use thiserror::Error;

/// Errors an [`Authenticator`](crate::auth::Authenticator) implementation
/// may return when it cannot produce an authentication outcome at all.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("External service error: {message}")]
    ExternalService { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn external_service(message: impl Into<String>) -> Self {
        Self::ExternalService {
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

/// Misuse of the login flow surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    /// A prior attempt is still awaiting its authentication outcome.
    #[error("a login attempt is already in progress")]
    AttemptInProgress,
}
