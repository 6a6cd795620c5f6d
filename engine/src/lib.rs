//! Login flow engine for the Authgate mobile banking app.
//!
//! This crate implements the presentation-facing login core: credential
//! validation, reduction of authentication outcomes into a closed set of
//! view states, and a service that publishes state transitions through a
//! watch channel any front end can observe. The actual credential exchange
//! is delegated to an injected [`auth::Authenticator`] implementation.

pub mod auth;
pub mod config;
pub mod errors;
pub mod validation;
