use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CLIENT_TARGETS: [&str; 4] = ["diario", "diario_auth", "diario_core", "diario_config"];

/// Logging configuration loaded from environment variables.
///
/// - **`LOG_LEVEL`**: Level for the client's own crates (default: `warn`)
/// - **`LOG_DIR`**: When set, JSON logs are also written to `LOG_DIR/diario.json`,
///   rotated daily
/// - **`RUST_LOG`**: Overrides the console filter entirely
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Filter directive: client crates at `level`, noisy dependencies at warn.
    pub fn directive(&self) -> String {
        let mut parts: Vec<String> = CLIENT_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect();
        parts.push("reqwest=warn".to_string());
        parts.push("hyper=warn".to_string());
        parts.push("rustls=warn".to_string());
        parts.join(",")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_dir: None,
        }
    }
}

/// Installs the global subscriber. Call once, early in `main`.
pub fn init_logging(config: &LoggingConfig) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()));

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    let registry = tracing_subscriber::registry().with(console_layer);

    #[cfg(feature = "file-logging")]
    {
        if let Some(dir) = &config.log_dir {
            use tracing_appender::rolling::{RollingFileAppender, Rotation};

            if let Err(e) = std::fs::create_dir_all(dir) {
                registry.init();
                tracing::warn!(error = %e, log_dir = %dir.display(), "Could not create log directory, file logging disabled");
                return;
            }

            let json_appender = RollingFileAppender::new(Rotation::DAILY, dir, "diario.json");
            let json_layer = fmt::layer()
                .json()
                .with_writer(json_appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info"));

            registry.with(json_layer).init();
            tracing::debug!(log_dir = %dir.display(), "File logging enabled");
            return;
        }
    }

    registry.init();
}
