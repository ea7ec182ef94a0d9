//! Session error taxonomy.
//!
//! None of these cross the public boundary of [`crate::SessionStore`]'s
//! state-returning operations; they surface only through
//! [`crate::SessionStore::try_login`] and in logs.

use diario_core::{ApiError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Authentication rejected by the server")]
    AuthenticationRejected,

    #[error("Persisted session could not be restored: {0}")]
    SessionRestoreFailed(String),

    #[error("Could not load the user profile: {0}")]
    ProfileFetchFailed(#[source] ApiError),

    #[error("Network unavailable: {0}")]
    NetworkUnavailable(#[source] ApiError),

    #[error("Unexpected server response: {0}")]
    Backend(#[source] ApiError),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Classifies a failure of the token-issuing request.
    pub(crate) fn from_token_request(err: ApiError) -> Self {
        if err.is_network() {
            return Self::NetworkUnavailable(err);
        }
        match err.status() {
            Some(status) if status.is_client_error() => Self::AuthenticationRejected,
            _ => Self::Backend(err),
        }
    }

    /// Message suitable for showing inline on a login form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials(_) => "Preencha email e senha",
            Self::AuthenticationRejected => "Email ou senha inválidos",
            Self::NetworkUnavailable(_) => "Não foi possível conectar ao servidor",
            _ => "Não foi possível entrar. Tente novamente.",
        }
    }
}
