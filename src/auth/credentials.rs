//! Credential management for OKEx API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::OkexError;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "OKEX_API_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "OKEX_SECRET_KEY";

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (sent as `api_key` with every private request)
    pub api_key: String,
    /// The secret key (only ever used as signature input)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret key.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Both the key and the secret are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, secret_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `OKEX_API_KEY` and `OKEX_SECRET_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, OkexError> {
        Self::from_env_vars(API_KEY_VAR, SECRET_KEY_VAR)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, OkexError> {
        let read = |var: &str| {
            std::env::var(var).map_err(|_| {
                OkexError::invalid_input(
                    "EnvCredentials::from_env_vars()",
                    format!("environment variable {var} not set"),
                )
            })
        };

        Ok(Self {
            credentials: Credentials::new(read(key_var)?, read(secret_var)?),
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
        assert!(creds.is_complete());
    }

    #[test]
    fn test_empty_secret_is_incomplete() {
        assert!(!Credentials::new("key", "").is_complete());
        assert!(!Credentials::new("", "secret").is_complete());
    }

    #[test]
    fn test_missing_env_var() {
        let result = EnvCredentials::from_env_vars(
            "OKEX_TEST_UNSET_KEY_VAR_3f1a",
            "OKEX_TEST_UNSET_SECRET_VAR_3f1a",
        );
        let err = result.err().expect("unset variables must fail");
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("OKEX_TEST_UNSET_KEY_VAR_3f1a"));
    }
}
