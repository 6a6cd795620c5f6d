//! Login view states and the pure reduction functions producing them.

use crate::auth::models::{AuthOutcome, LoginRequest, UNKNOWN, UserAccount};
use crate::errors::ServiceResult;
use crate::validation::{PasswordPolicy, is_valid_password, is_valid_username};
use tracing::warn;
use validator::Validate;

/// The closed set of states the login screen can be in.
///
/// Exactly one state is current at any time. Input errors and remote
/// rejections are states, not errors: every variant corresponds to a
/// distinct renderable message.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginViewState {
    Idle,
    InvalidUsername,
    InvalidPassword,
    Loading,
    Success(UserAccount),
    Failure { code: String, message: String },
    UnmappedError,
}

impl LoginViewState {
    /// True for the states that end an attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LoginViewState::Success(_) | LoginViewState::Failure { .. } | LoginViewState::UnmappedError
        )
    }
}

/// Decides the state a submitted request transitions to.
///
/// The username is checked strictly before the password: a request invalid
/// in both dimensions reports `InvalidUsername`. Only `Loading` permits an
/// authenticator call.
pub fn reduce_submit(request: &LoginRequest, policy: &PasswordPolicy) -> LoginViewState {
    // Emptiness first, via the field annotations; shape checks after.
    if let Err(errors) = request.validate() {
        let fields = errors.field_errors();
        if fields.contains_key("username") {
            return LoginViewState::InvalidUsername;
        }
        if fields.contains_key("password") {
            return LoginViewState::InvalidPassword;
        }
    }

    if !is_valid_username(&request.username) {
        return LoginViewState::InvalidUsername;
    }
    if !is_valid_password(&request.password, policy) {
        return LoginViewState::InvalidPassword;
    }

    LoginViewState::Loading
}

/// Maps an authentication outcome to its terminal view state.
///
/// Success passes the account through unmodified. A failure's missing code
/// or message is replaced by [`UNKNOWN`], never left absent. Anything the
/// authenticator could not express as an outcome degrades to
/// `UnmappedError` instead of propagating.
pub fn reduce_outcome(outcome: ServiceResult<AuthOutcome>) -> LoginViewState {
    match outcome {
        Ok(AuthOutcome::Success(account)) => LoginViewState::Success(account),
        Ok(AuthOutcome::Failure { code, message }) => LoginViewState::Failure {
            code: code.unwrap_or_else(|| UNKNOWN.to_string()),
            message: message.unwrap_or_else(|| UNKNOWN.to_string()),
        },
        Err(error) => {
            warn!("Unmapped authentication outcome: {}", error);
            LoginViewState::UnmappedError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest::new(username, password)
    }

    fn account() -> UserAccount {
        UserAccount {
            id: "1".to_string(),
            username: "a@b.com".to_string(),
            email: "a@b.com".to_string(),
            account_name: "Checking".to_string(),
        }
    }

    #[test]
    fn empty_username_rejected_regardless_of_password() {
        let policy = PasswordPolicy::default();

        assert_eq!(
            reduce_submit(&request("", "Str0ngPass!"), &policy),
            LoginViewState::InvalidUsername
        );
        assert_eq!(
            reduce_submit(&request("", ""), &policy),
            LoginViewState::InvalidUsername
        );
    }

    #[test]
    fn username_checked_strictly_before_password() {
        let policy = PasswordPolicy::default();

        // Invalid in both dimensions must always report the username.
        assert_eq!(
            reduce_submit(&request("not-an-email", "short"), &policy),
            LoginViewState::InvalidUsername
        );
    }

    #[test]
    fn weak_password_rejected_after_valid_username() {
        let policy = PasswordPolicy::default();

        assert_eq!(
            reduce_submit(&request("a@b.com", "short"), &policy),
            LoginViewState::InvalidPassword
        );
        assert_eq!(
            reduce_submit(&request("a@b.com", ""), &policy),
            LoginViewState::InvalidPassword
        );
    }

    #[test]
    fn valid_credentials_transition_to_loading() {
        let policy = PasswordPolicy::default();

        assert_eq!(
            reduce_submit(&request("a@b.com", "Str0ngPass!"), &policy),
            LoginViewState::Loading
        );
        assert_eq!(
            reduce_submit(&request("529.982.247-25", "Str0ngPass!"), &policy),
            LoginViewState::Loading
        );
    }

    #[test]
    fn successful_outcome_passes_account_through() {
        let state = reduce_outcome(Ok(AuthOutcome::Success(account())));
        assert_eq!(state, LoginViewState::Success(account()));
    }

    #[test]
    fn missing_failure_fields_replaced_by_sentinel() {
        let state = reduce_outcome(Ok(AuthOutcome::Failure {
            code: None,
            message: Some("bad creds".to_string()),
        }));
        assert_eq!(
            state,
            LoginViewState::Failure {
                code: UNKNOWN.to_string(),
                message: "bad creds".to_string(),
            }
        );

        let state = reduce_outcome(Ok(AuthOutcome::Failure {
            code: None,
            message: None,
        }));
        assert_eq!(
            state,
            LoginViewState::Failure {
                code: UNKNOWN.to_string(),
                message: UNKNOWN.to_string(),
            }
        );
    }

    #[test]
    fn failure_fields_pass_through_verbatim_when_present() {
        let state = reduce_outcome(Ok(AuthOutcome::Failure {
            code: Some("403".to_string()),
            message: Some("account locked".to_string()),
        }));
        assert_eq!(
            state,
            LoginViewState::Failure {
                code: "403".to_string(),
                message: "account locked".to_string(),
            }
        );
    }

    #[test]
    fn unrecognized_outcome_degrades_to_unmapped_error() {
        let state = reduce_outcome(Err(ServiceError::external_service(
            "undecodable response body",
        )));
        assert_eq!(state, LoginViewState::UnmappedError);
    }

    #[test]
    fn terminal_states_are_flagged() {
        assert!(LoginViewState::Success(account()).is_terminal());
        assert!(
            LoginViewState::Failure {
                code: "1".to_string(),
                message: "m".to_string()
            }
            .is_terminal()
        );
        assert!(LoginViewState::UnmappedError.is_terminal());

        assert!(!LoginViewState::Idle.is_terminal());
        assert!(!LoginViewState::Loading.is_terminal());
        assert!(!LoginViewState::InvalidUsername.is_terminal());
        assert!(!LoginViewState::InvalidPassword.is_terminal());
    }
}
