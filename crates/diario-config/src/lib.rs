//! # Diário Config
//!
//! Configuration types for the Diário Online client.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`api`]: Backend address, request timeout, and authentication endpoints
//! - [`storage`]: Where the persisted session lives
//!
//! Both are read once at startup and never mutated afterwards.
//!
//! # Example
//!
//! ```ignore
//! use diario_config::{ApiConfig, StorageConfig};
//!
//! let api_config = ApiConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! ```

pub mod api;
pub mod storage;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use storage::{StorageConfig, TOKEN_STORAGE_KEY};
