//! Authentication models.
//!
//! Credentials are transient and only live for the duration of a login call.
//! A [`TokenPair`] is what the backend issues in exchange and what gets
//! persisted between runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Login credentials as submitted to the token endpoint.
///
/// Serializes to `{"email": ..., "password": ...}`.
#[derive(Clone, Serialize, Validate)]
pub struct Credentials {
    #[serde(rename = "email")]
    #[validate(email)]
    pub identifier: String,
    #[serde(rename = "password")]
    #[validate(length(min = 1))]
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into().trim().to_string(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Access and refresh credential pair issued at login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "access", alias = "access_token", alias = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refresh", alias = "refresh_token", alias = "refreshToken")]
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// A pair with an empty access token cannot authenticate anything.
    pub fn is_usable(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}
