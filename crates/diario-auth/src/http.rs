//! Shared HTTP client for the backend REST API.
//!
//! Base address, content type, and timeout are fixed at construction. The
//! only mutable state is the default `Authorization` header, which can be
//! written solely by [`crate::SessionStore`]; everything else in the process
//! only issues requests through it.

use diario_config::ApiConfig;
use diario_config::api::CONTENT_TYPE;
use diario_core::ApiError;
use diario_models::{ListResponse, TokenPair};
use parking_lot::RwLock;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

// Upper bound on pages followed by one `get_all` call.
const MAX_PAGES: usize = 1000;

/// HTTP client carrying the session's bearer credential.
pub struct AuthenticatedHttpClient {
    base: Url,
    client: reqwest::Client,
    bearer: RwLock<Option<HeaderValue>>,
}

impl std::fmt::Debug for AuthenticatedHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedHttpClient")
            .field("base", &self.base.as_str())
            .field("has_bearer", &self.has_bearer())
            .finish_non_exhaustive()
    }
}

impl AuthenticatedHttpClient {
    /// Builds the client from process-wide configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base address does not parse.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
        headers.insert(header::ACCEPT, HeaderValue::from_static(CONTENT_TYPE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base,
            client,
            bearer: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Whether requests currently carry an `Authorization` header.
    pub fn has_bearer(&self) -> bool {
        self.bearer.read().is_some()
    }

    pub(crate) fn set_bearer(&self, value: HeaderValue) {
        *self.bearer.write() = Some(value);
    }

    pub(crate) fn clear_bearer(&self) {
        *self.bearer.write() = None;
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request_json(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json(Method::PATCH, path, Some(body)).await
    }

    /// Issues a POST and discards any response body.
    pub async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    /// Issues a PUT and discards any response body.
    pub async fn put_no_content<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// Issues a DELETE and discards any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// Fetches a list endpoint, following `next` links until the last page.
    ///
    /// A bare array is treated as a single page. Continuation links must stay
    /// on the backend's origin so the bearer header is never sent elsewhere.
    pub async fn get_all<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut url = self.url(path)?;

        for page in 1..=MAX_PAGES {
            let bytes = self.send_url(Method::GET, url.clone(), None::<&()>).await?;
            let list: ListResponse<T> = serde_json::from_slice(&bytes)?;
            let (results, next) = list.into_parts();
            items.extend(results);

            let Some(next) = next else {
                debug!(pages = page, items = items.len(), "List fetched");
                return Ok(items);
            };
            url = self.next_page(&url, &next)?;
        }

        Err(ApiError::Decode(format!(
            "pagination did not end after {MAX_PAGES} pages"
        )))
    }

    async fn request_json<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.send(method, path, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send_url(method, url, body).await
    }

    #[instrument(skip(self, method, url, body), fields(http.method = %method, http.path = url.path()))]
    async fn send_url<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request: RequestBuilder = self.client.request(method, url);

        // Snapshot the header; the lock is never held across the await below.
        let bearer = self.bearer.read().clone();
        if let Some(value) = bearer {
            request = request.header(header::AUTHORIZATION, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            warn!(http.status = status.as_u16(), "Request rejected");
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        debug!(http.status = status.as_u16(), "Request completed");
        Ok(bytes.to_vec())
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    fn next_page(&self, current: &Url, next: &str) -> Result<Url, ApiError> {
        let url = self.url(next)?;
        if url.origin() != self.base.origin() {
            return Err(ApiError::InvalidUrl(format!(
                "{next}: pagination link points outside the backend"
            )));
        }
        if url == *current {
            return Err(ApiError::Decode(format!("{next}: pagination link repeats the current page")));
        }
        Ok(url)
    }
}

/// Builds the `Authorization` header value for a token pair.
pub(crate) fn bearer_header(tokens: &TokenPair) -> Result<HeaderValue, ApiError> {
    let mut value = HeaderValue::from_str(&tokens.bearer())
        .map_err(|_| ApiError::InvalidHeader("access token contains invalid characters".into()))?;
    value.set_sensitive(true);
    Ok(value)
}
