use std::env;
use std::path::PathBuf;

/// Fixed key under which the token pair is persisted.
pub const TOKEN_STORAGE_KEY: &str = "@authTokens";

/// Session persistence configuration.
///
/// # Environment Variables
///
/// - `DIARIO_STORAGE_DIR`: Directory holding persisted values (default: `storage/session`)
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            dir: env::var("DIARIO_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/session")),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("storage/session"),
        }
    }
}
