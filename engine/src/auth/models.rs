//! Data structures for authentication-related entities.
//!
//! This module defines the login request, the account payload carried by a
//! successful outcome, and the outcome contract produced by the injected
//! authenticator.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sentinel substituted for a failure code or message the backend omitted.
pub const UNKNOWN: &str = "unknown";

/// Login request payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Account information carried by a successful authentication outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    pub account_name: String,
}

/// Result of a credential exchange, as reported by the authenticator.
///
/// `Failure` carries the backend's rejection verbatim; either field may be
/// absent on the wire and is replaced by [`UNKNOWN`] during reduction.
/// Outcomes the authenticator cannot express in this shape are returned as
/// a [`ServiceError`](crate::errors::ServiceError) instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthOutcome {
    Success(UserAccount),
    Failure {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}
