//! # Diário Auth
//!
//! Session lifecycle and role routing for the Diário Online client.
//!
//! - [`http`]: The shared [`AuthenticatedHttpClient`]; its bearer header is
//!   written only by the session store
//! - [`session`]: [`SessionStore`] restores, logs in, and logs out, publishing
//!   [`SessionState`] snapshots
//! - [`router`]: [`RoleRouter`] maps a session snapshot to the stack to mount
//! - [`errors`]: [`SessionError`] taxonomy
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use diario_auth::{RoleRouter, Route, SessionStore};
//! use diario_config::{ApiConfig, StorageConfig};
//! use diario_core::FileKeyValueStore;
//!
//! let storage = Arc::new(FileKeyValueStore::new(StorageConfig::from_env().dir));
//! let session = SessionStore::new(&ApiConfig::from_env(), storage)?;
//!
//! let state = session.restore().await;
//! match RoleRouter::select(&state) {
//!     Route::Loading => {}
//!     Route::Stack(stack) => println!("mounting {stack}"),
//! }
//! ```

pub mod errors;
pub mod http;
pub mod router;
pub mod session;

pub use errors::SessionError;
pub use http::AuthenticatedHttpClient;
pub use router::{RoleRouter, Route, Stack};
pub use session::{SessionState, SessionStore};
