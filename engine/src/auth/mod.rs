//! Login flow module: credential models, view states, and the service
//! that orchestrates validation and authentication.
//!
//! This module provides the public interface for the login flow — the
//! request and account models, the [`Authenticator`] collaborator contract,
//! the closed [`LoginViewState`] set, and the [`LoginService`] publishing
//! state transitions to observers.

pub mod authenticator;
pub mod models;
pub mod service;
pub mod state;

// Re-exports for convenience
pub use authenticator::Authenticator;
pub use models::{AuthOutcome, LoginRequest, UserAccount, UNKNOWN};
pub use service::LoginService;
pub use state::LoginViewState;
