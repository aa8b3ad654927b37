//! Environment variable API key provider.
//!
//! The shared secret clients must send in `x-api-key` comes from
//! `FITNESS_API_KEY`. When the variable is unset the service still starts
//! with a built-in fallback key, which is only suitable for local testing.

use std::fmt;

use secrecy::SecretString;

/// Environment variable holding the shared API key.
pub const API_KEY_ENV: &str = "FITNESS_API_KEY";

/// Key used when [`API_KEY_ENV`] is not set.
const FALLBACK_API_KEY: &str = "haorudghoeurhgosuehr";

/// Where the active API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    Environment,
    Fallback,
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeySource::Environment => write!(f, "environment"),
            ApiKeySource::Fallback => write!(f, "fallback"),
        }
    }
}

/// The resolved shared API key.
///
/// The key is held in a [`SecretString`], so it never appears in `Debug`
/// output or logs.
#[derive(Debug)]
pub struct ResolvedApiKey {
    pub key: SecretString,
    pub source: ApiKeySource,
}

/// Environment variable API key provider.
pub struct EnvApiKeyProvider;

impl EnvApiKeyProvider {
    /// Resolve the key from the process environment.
    pub fn resolve() -> ResolvedApiKey {
        Self::resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve the key using `lookup` to read variables.
    ///
    /// A variable that is set is used verbatim, even when empty. Invalid
    /// Unicode is treated as unset.
    pub fn resolve_with<F>(lookup: F) -> ResolvedApiKey
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_KEY_ENV) {
            Some(value) => ResolvedApiKey {
                key: SecretString::from(value),
                source: ApiKeySource::Environment,
            },
            None => {
                tracing::warn!(
                    env = API_KEY_ENV,
                    "API key variable not set, using the built-in fallback key"
                );
                ResolvedApiKey {
                    key: SecretString::from(FALLBACK_API_KEY),
                    source: ApiKeySource::Fallback,
                }
            }
        }
    }
}
