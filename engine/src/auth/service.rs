//! Core business logic for the login flow.
//!
//! [`LoginService`] owns the current view state and drives the attempt
//! lifecycle: validate the submitted credentials, publish `Loading`, await
//! the injected authenticator under a bounded timeout, and publish the
//! terminal state. One attempt runs at a time; overlapping submissions are
//! rejected deterministically.

use crate::auth::authenticator::Authenticator;
use crate::auth::models::LoginRequest;
use crate::auth::state::{LoginViewState, reduce_outcome, reduce_submit};
use crate::config::Config;
use crate::errors::FlowError;
use crate::validation::PasswordPolicy;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{info, warn};

/// Stateful orchestrator of the login flow.
///
/// The current [`LoginViewState`] is held in a watch channel; observers
/// subscribe through [`LoginService::subscribe`] and wake on every
/// transition. Only this service writes the state.
pub struct LoginService {
    authenticator: Arc<dyn Authenticator>,
    password_policy: PasswordPolicy,
    auth_timeout: Duration,
    state_tx: watch::Sender<LoginViewState>,
    attempt_in_flight: AtomicBool,
}

// Clears the in-flight flag on drop; a cancelled submit must not leave the
// flow locked.
struct AttemptGuard<'a>(&'a AtomicBool);

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl LoginService {
    /// Creates a new LoginService with an injected authenticator.
    pub fn new(authenticator: Arc<dyn Authenticator>, config: &Config) -> Self {
        let (state_tx, _) = watch::channel(LoginViewState::Idle);

        LoginService {
            authenticator,
            password_policy: config.password_policy(),
            auth_timeout: Duration::from_secs(config.auth_timeout_seconds),
            state_tx,
            attempt_in_flight: AtomicBool::new(false),
        }
    }

    /// Runs one login attempt and returns its resulting state.
    ///
    /// Invalid input resolves locally: the matching input-error state is
    /// published and returned without calling the authenticator. Valid
    /// input publishes `Loading`, performs exactly one authenticator call
    /// with the submitted credentials, and publishes the terminal state.
    ///
    /// A second `submit` while a prior attempt is still loading fails with
    /// [`FlowError::AttemptInProgress`]; nothing is queued.
    pub async fn submit(&self, request: LoginRequest) -> Result<LoginViewState, FlowError> {
        if self
            .attempt_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FlowError::AttemptInProgress);
        }
        let _guard = AttemptGuard(&self.attempt_in_flight);

        Ok(self.run_attempt(request).await)
    }

    async fn run_attempt(&self, request: LoginRequest) -> LoginViewState {
        match reduce_submit(&request, &self.password_policy) {
            LoginViewState::Loading => {}
            rejected => {
                warn!("Login input rejected: {:?}", rejected);
                self.publish(rejected.clone());
                return rejected;
            }
        }

        self.publish(LoginViewState::Loading);
        info!("Login attempt started");

        let outcome = timeout(self.auth_timeout, self.authenticator.authenticate(&request)).await;
        let terminal = match outcome {
            Ok(result) => reduce_outcome(result),
            Err(_) => {
                warn!(
                    "Authentication timed out after {}s",
                    self.auth_timeout.as_secs()
                );
                LoginViewState::UnmappedError
            }
        };

        match &terminal {
            LoginViewState::Success(_) => info!("Login attempt succeeded"),
            LoginViewState::Failure { code, .. } => {
                warn!("Login attempt failed with code {}", code)
            }
            _ => {}
        }

        self.publish(terminal.clone());
        terminal
    }

    /// Clears the current state back to `Idle`.
    ///
    /// Callable from any state and free of side effects; a subsequent
    /// `submit` proceeds normally. An in-flight attempt is not cancelled —
    /// its terminal state is still published when the authenticator
    /// resolves.
    pub fn reset(&self) {
        self.publish(LoginViewState::Idle);
    }

    /// Subscribes to state transitions. Receivers wake on each change and
    /// read the latest value.
    pub fn subscribe(&self) -> watch::Receiver<LoginViewState> {
        self.state_tx.subscribe()
    }

    /// The current view state.
    pub fn state(&self) -> LoginViewState {
        self.state_tx.borrow().clone()
    }

    fn publish(&self, state: LoginViewState) {
        self.state_tx.send_replace(state);
    }
}
