use std::env;
use std::time::Duration;

/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "application/json";

const DEFAULT_BASE_URL: &str = "https://192.168.0.16:8000/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TOKEN_PATH: &str = "api/token/";
const DEFAULT_PROFILE_PATH: &str = "api/usuario-logado/";

/// Backend REST API configuration.
///
/// # Environment Variables
///
/// - `DIARIO_API_URL`: Base address of the backend (default: `https://192.168.0.16:8000/`)
/// - `DIARIO_API_TIMEOUT_SECS`: Per-request timeout in seconds (default: `10`)
/// - `DIARIO_TOKEN_PATH`: Endpoint that issues token pairs (default: `api/token/`)
/// - `DIARIO_PROFILE_PATH`: Endpoint returning the logged-in user (default: `api/usuario-logado/`)
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub token_path: String,
    pub profile_path: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(
                env::var("DIARIO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ),
            timeout: Duration::from_secs(
                env::var("DIARIO_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            token_path: env::var("DIARIO_TOKEN_PATH")
                .unwrap_or_else(|_| DEFAULT_TOKEN_PATH.to_string()),
            profile_path: env::var("DIARIO_PROFILE_PATH")
                .unwrap_or_else(|_| DEFAULT_PROFILE_PATH.to_string()),
        }
    }

    /// Configuration pointing at `base_url` with default timeout and endpoints.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_path: DEFAULT_TOKEN_PATH.to_string(),
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
        }
    }
}

// Relative endpoint paths are joined onto the base, which only keeps the last
// path segment when it ends with a slash.
fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
