//! API credential loading.
//!
//! The key is read once at startup and handed to the gateway explicitly;
//! nothing else reads the environment for it.

use thiserror::Error;
use tracing::debug;

/// Errors while loading the API credential
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{var} is not set (export it or add it to a .env file)")]
    Missing { var: String },

    #[error("{var} is set but empty")]
    Empty { var: String },
}

/// An API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve `var` through `lookup`, rejecting missing and blank values.
    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self, CredentialError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            None => Err(CredentialError::Missing {
                var: var.to_string(),
            }),
            Some(value) if value.trim().is_empty() => Err(CredentialError::Empty {
                var: var.to_string(),
            }),
            Some(value) => Ok(Self(value.trim().to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Load `.env` from the working directory (if present), then read `var`.
pub fn load_api_key(var: &str) -> Result<ApiKey, CredentialError> {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => debug!("Ignoring unreadable .env file: {}", e),
    }
    ApiKey::from_lookup(var, |name| std::env::var(name).ok())
}
