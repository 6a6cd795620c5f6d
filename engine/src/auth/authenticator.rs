//! The injected authentication collaborator.

use crate::auth::models::{AuthOutcome, LoginRequest};
use crate::errors::ServiceResult;
use async_trait::async_trait;

/// Performs the actual credential exchange for a validated login request.
///
/// Implementations own the transport (network, mock, local store); the
/// login flow only consumes the [`AuthOutcome`] contract. A fault the
/// implementation cannot express as an outcome — an undecodable response,
/// an internal error — is returned as `Err` and rendered by the flow as an
/// unmapped error, never as a panic.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, request: &LoginRequest) -> ServiceResult<AuthOutcome>;
}
