//! Session lifecycle: restore, login, logout.
//!
//! [`SessionStore`] is the single writer of three pieces of shared state: the
//! persisted [`TokenPair`], the HTTP client's bearer header, and the in-memory
//! [`UserProfile`]. It publishes a [`SessionState`] snapshot on a watch channel
//! after every change, and guarantees for every published value that
//!
//! - tokens are present exactly when the client carries a bearer header, and
//! - a user is present only together with tokens.
//!
//! Operations are serialized: at most one of `restore`, `login`, `logout` is
//! in flight at a time.

use std::sync::Arc;

use diario_config::{ApiConfig, TOKEN_STORAGE_KEY};
use diario_core::{ApiError, KeyValueStore, StorageError};
use diario_models::{Credentials, TokenPair, UserProfile};
use tokio::sync::{Mutex, watch};
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

use crate::errors::SessionError;
use crate::http::{AuthenticatedHttpClient, bearer_header};

/// Externally observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub loading: bool,
    pub user: Option<UserProfile>,
    pub tokens: Option<TokenPair>,
}

impl SessionState {
    /// State at process start, before `restore` has run.
    pub fn initial() -> Self {
        Self {
            loading: true,
            user: None,
            tokens: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

pub struct SessionStore {
    client: Arc<AuthenticatedHttpClient>,
    storage: Arc<dyn KeyValueStore>,
    token_path: String,
    profile_path: String,
    state: watch::Sender<SessionState>,
    op_guard: Mutex<()>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("client", &self.client)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates a store with a fresh HTTP client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the configured base address is invalid.
    pub fn new(config: &ApiConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        let client = AuthenticatedHttpClient::new(config)?;
        let (state, _) = watch::channel(SessionState::initial());

        Ok(Self {
            client: Arc::new(client),
            storage,
            token_path: config.token_path.clone(),
            profile_path: config.profile_path.clone(),
            state,
            op_guard: Mutex::new(()),
        })
    }

    /// Current snapshot.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Read-only handle for issuing authenticated requests.
    pub fn client(&self) -> Arc<AuthenticatedHttpClient> {
        Arc::clone(&self.client)
    }

    /// Checks the header/token and user/token invariants against the live client.
    pub fn invariants_hold(&self) -> bool {
        let state = self.state.borrow();
        let tokens_match_header = state.tokens.is_some() == self.client.has_bearer();
        let user_has_tokens = state.user.is_none() || state.tokens.is_some();
        tokens_match_header && user_has_tokens
    }

    /// Restores a persisted session at startup.
    ///
    /// Never fails: any problem with the persisted pair or the profile fetch
    /// clears the session and resolves to the unauthenticated state.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> SessionState {
        let _guard = self.op_guard.lock().await;
        self.set_loading(true);

        match self.restore_persisted().await {
            Ok(Some(user)) => {
                info!(user.id = ?user.id, user.role = %user.role, "Session restored");
            }
            Ok(None) => debug!("No persisted session"),
            Err(e) => {
                warn!(error = %e, "Session restore failed, starting unauthenticated");
                self.discard().await;
            }
        }

        self.set_loading(false);
        self.state()
    }

    /// Logs in and reports only success or failure.
    pub async fn login(&self, identifier: &str, secret: &str) -> bool {
        self.try_login(Credentials::new(identifier, secret)).await.is_ok()
    }

    /// Logs in, returning the profile or the reason for failure.
    ///
    /// On failure the session is left unauthenticated with nothing attached
    /// or persisted, including when the token was issued but the profile
    /// could not be loaded.
    #[instrument(skip(self, credentials), fields(identifier = %credentials.identifier))]
    pub async fn try_login(&self, credentials: Credentials) -> Result<UserProfile, SessionError> {
        let _guard = self.op_guard.lock().await;
        self.set_loading(true);

        let result = self.authenticate(&credentials).await;
        match &result {
            Ok(user) => info!(user.id = ?user.id, user.role = %user.role, "Login succeeded"),
            Err(e) => {
                warn!(error = %e, "Login failed");
                self.discard().await;
            }
        }

        self.set_loading(false);
        result
    }

    /// Clears the session. Idempotent and never touches the network.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        let _guard = self.op_guard.lock().await;
        self.discard().await;
        self.set_loading(false);
        info!("Logged out");
    }

    async fn restore_persisted(&self) -> Result<Option<UserProfile>, SessionError> {
        let Some(raw) = self.storage.get(TOKEN_STORAGE_KEY).await? else {
            return Ok(None);
        };

        let tokens: TokenPair = serde_json::from_str(&raw)
            .map_err(|e| SessionError::SessionRestoreFailed(format!("corrupt token pair: {e}")))?;
        if !tokens.is_usable() {
            return Err(SessionError::SessionRestoreFailed(
                "persisted access token is empty".to_string(),
            ));
        }

        self.attach(&tokens)
            .map_err(|e| SessionError::SessionRestoreFailed(e.to_string()))?;

        let user = self
            .fetch_profile()
            .await
            .map_err(|e| SessionError::SessionRestoreFailed(e.to_string()))?;

        self.state.send_modify(|s| s.user = Some(user.clone()));
        Ok(Some(user))
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile, SessionError> {
        credentials
            .validate()
            .map_err(|e| SessionError::InvalidCredentials(e.to_string()))?;

        let tokens: TokenPair = self
            .client
            .post(&self.token_path, credentials)
            .await
            .map_err(SessionError::from_token_request)?;
        if !tokens.is_usable() {
            return Err(SessionError::AuthenticationRejected);
        }

        // Persist and attach strictly before the profile fetch.
        let raw = serde_json::to_string(&tokens).map_err(StorageError::from)?;
        self.storage.set(TOKEN_STORAGE_KEY, &raw).await?;
        self.attach(&tokens).map_err(SessionError::Backend)?;

        let user = self
            .fetch_profile()
            .await
            .map_err(SessionError::ProfileFetchFailed)?;

        self.state.send_modify(|s| s.user = Some(user.clone()));
        Ok(user)
    }

    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get(&self.profile_path).await
    }

    /// Sets header and published tokens together.
    fn attach(&self, tokens: &TokenPair) -> Result<(), ApiError> {
        let value = bearer_header(tokens)?;
        self.state.send_modify(|s| {
            self.client.set_bearer(value);
            s.tokens = Some(tokens.clone());
        });
        Ok(())
    }

    /// Clears header, published tokens and user, then the persisted pair.
    async fn discard(&self) {
        self.state.send_modify(|s| {
            self.client.clear_bearer();
            s.tokens = None;
            s.user = None;
        });

        if let Err(e) = self.storage.remove(TOKEN_STORAGE_KEY).await {
            error!(error = %e, "Failed to delete persisted session");
        }
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_if_modified(|s| {
            let changed = s.loading != loading;
            s.loading = loading;
            changed
        });
    }
}
