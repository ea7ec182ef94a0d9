//! # Diário Core
//!
//! Core types, errors, and persistence abstractions for the Diário Online client.
//!
//! This crate provides foundational types used throughout the client:
//!
//! - [`errors`]: Error type for exchanges with the backend REST API
//! - [`storage`]: Durable key-value persistence used to keep the session across restarts
//!
//! # Example
//!
//! ```ignore
//! use diario_core::storage::{FileKeyValueStore, KeyValueStore};
//! use std::path::PathBuf;
//!
//! let store = FileKeyValueStore::new(PathBuf::from("./storage/session"));
//!
//! store.set("@authTokens", r#"{"access":"a","refresh":"r"}"#).await?;
//! let raw = store.get("@authTokens").await?;
//! store.remove("@authTokens").await?;
//! ```

pub mod errors;
pub mod storage;

// Re-export commonly used types at crate root
pub use errors::ApiError;
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
