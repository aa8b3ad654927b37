//! API key authentication extractor.
//!
//! Reads the shared secret from the `x-api-key` header and compares it
//! byte-for-byte against the configured key. The configured key is kept only
//! as a SHA-256 digest; the provided key is hashed the same way before the
//! comparison.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};

use crate::http::error::AppError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// SHA-256 digest of the configured API key.
pub struct ApiKeyDigest([u8; 32]);

impl ApiKeyDigest {
    pub fn new(key: &str) -> Self {
        Self(hash_api_key(key.as_bytes()))
    }

    /// Whether `provided` is exactly the configured key.
    pub fn matches(&self, provided: &[u8]) -> bool {
        hash_api_key(provided) == self.0
    }
}

/// Authenticated request marker. Extracting this validates the API key.
///
/// Handlers that take `Authenticated` as their first extractor never run,
/// and never read the body, when the key is wrong.
pub struct Authenticated;

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get(API_KEY_HEADER) {
            Some(value) if state.api_key.matches(value.as_bytes()) => Ok(Authenticated),
            Some(_) => {
                tracing::warn!("Rejected request with invalid API key");
                Err(AppError::Unauthorized)
            }
            None => {
                tracing::warn!("Rejected request without API key header");
                Err(AppError::Unauthorized)
            }
        }
    }
}

/// Compute the SHA-256 digest of an API key.
fn hash_api_key(key: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(key));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_matches_exact_key() {
        let digest = ApiKeyDigest::new("s3cret");
        assert!(digest.matches(b"s3cret"));
    }

    #[test]
    fn test_digest_is_byte_exact() {
        let digest = ApiKeyDigest::new("s3cret");
        assert!(!digest.matches(b"s3cret "));
        assert!(!digest.matches(b" s3cret"));
        assert!(!digest.matches(b"S3CRET"));
        assert!(!digest.matches(b""));
    }

    #[test]
    fn test_empty_key_matches_empty_header() {
        let digest = ApiKeyDigest::new("");
        assert!(digest.matches(b""));
        assert!(!digest.matches(b"x"));
    }
}
