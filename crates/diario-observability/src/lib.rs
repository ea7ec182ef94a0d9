//! Diário Observability
//!
//! Logging setup for the Diário Online client:
//! - Compact console output on stderr, filtered by `RUST_LOG` or `LOG_LEVEL`
//! - Optional daily-rotated JSON log files under `LOG_DIR`
//!
//! # Features
//!
//! - `file-logging` (default): Enables the rolling JSON file layer
//!
//! # Examples
//!
//! ```no_run
//! use diario_observability::{LoggingConfig, init_logging};
//!
//! init_logging(&LoggingConfig::from_env());
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{LoggingConfig, init_logging};
