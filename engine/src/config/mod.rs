//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the password policy knobs and the authenticator call timeout. Every
//! parameter has a default, so the engine also works with no environment
//! configured at all.

use crate::validation::PasswordPolicy;
use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub min_password_length: usize,
    pub require_password_mix: bool,
    pub auth_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let min_password_length = env::var("MIN_PASSWORD_LENGTH")
            .unwrap_or_else(|_| "8".to_string())
            .parse::<usize>()
            .context("MIN_PASSWORD_LENGTH must be a valid number")?;

        let require_password_mix = env::var("REQUIRE_PASSWORD_MIX")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .context("REQUIRE_PASSWORD_MIX must be true or false")?;

        let auth_timeout_seconds = env::var("AUTH_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("AUTH_TIMEOUT_SECONDS must be a valid number")?;

        Ok(Config {
            min_password_length,
            require_password_mix,
            auth_timeout_seconds,
        })
    }

    /// The typed subset of configuration handed to the password validator.
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_password_length,
            require_mix: self.require_password_mix,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_password_length: 8,
            require_password_mix: true,
            auth_timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_policy() {
        let config = Config::default();
        assert_eq!(config.min_password_length, 8);
        assert!(config.require_password_mix);
        assert_eq!(config.auth_timeout_seconds, 30);
    }

    #[test]
    fn password_policy_mirrors_config_fields() {
        let config = Config {
            min_password_length: 12,
            require_password_mix: false,
            auth_timeout_seconds: 5,
        };

        let policy = config.password_policy();
        assert_eq!(policy.min_length, 12);
        assert!(!policy.require_mix);
    }
}
