//! The credential-check collaborator.
//!
//! The presentation layer never holds a secret; it sends whatever bearer
//! token the operator gave it and the server checks it here. Handlers only
//! see the [`Authenticator`] interface, so the static-token scheme can be
//! swapped out without touching them.

use axum::http::{HeaderMap, header};
use subtle::ConstantTimeEq;

/// Verifies presented admin credentials.
pub trait Authenticator: Send + Sync {
    /// Whether `token` grants admin access.
    fn verify(&self, token: &str) -> bool;
}

/// A single operator-configured bearer token.
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl Authenticator for StaticToken {
    fn verify(&self, token: &str) -> bool {
        // Constant-time comparison; only the length can leak.
        self.token.as_bytes().ct_eq(token.as_bytes()).into()
    }
}

/// Extracts the bearer token from an `Authorization` header, if any.
/// Non-UTF-8 header values are treated as absent.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
