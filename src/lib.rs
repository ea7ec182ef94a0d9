//! # Diário Online client
//!
//! Client for the Diário Online school administration backend. School
//! administrators, teachers, staff, students, technicians, and requesters sign
//! in and manage classrooms, students, teachers, attendance, lesson records,
//! reports, and the school's own registration through the backend's REST API.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── diario-core/          # ApiError, key-value persistence
//! ├── diario-config/        # ApiConfig, StorageConfig (from env)
//! ├── diario-models/        # Credentials, TokenPair, UserProfile/Role, school and attendance DTOs
//! ├── diario-auth/          # AuthenticatedHttpClient, SessionStore, RoleRouter
//! └── diario-observability/ # Logging setup
//! src/
//! ├── cli/                  # Terminal front-end commands
//! ├── modules/              # School resource services
//! │   ├── attendance/
//! │   ├── classrooms/
//! │   ├── records/
//! │   ├── reports/
//! │   ├── school/
//! │   ├── students/
//! │   └── teachers/
//! └── utils/                # Shared error type
//! ```
//!
//! ## Session lifecycle
//!
//! ```text
//! start ─► restore() ─┬─ nothing persisted ───────────► unauthenticated
//!                     ├─ persisted + profile OK ──────► authenticated(role)
//!                     └─ persisted + profile fails ───► cleared, unauthenticated
//! login() ─┬─ token + profile OK ─► persisted, header attached, authenticated
//!          └─ any failure ────────► nothing attached or persisted
//! logout() ─► cleared (no network)
//! ```
//!
//! The [`RoleRouter`](diario_auth::RoleRouter) maps each published
//! [`SessionState`](diario_auth::SessionState) to a stack, checking roles in
//! the order administrator, technician, requester, teacher, staff, student,
//! falling back to the generic school stack.
//!
//! ## Environment Variables
//!
//! ```bash
//! DIARIO_API_URL=https://192.168.0.16:8000/
//! DIARIO_API_TIMEOUT_SECS=10
//! DIARIO_STORAGE_DIR=storage/session
//! LOG_LEVEL=warn
//! LOG_DIR=storage/logs
//! ```

pub mod cli;
pub mod modules;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use diario_auth;
pub use diario_config;
pub use diario_core;
pub use diario_models;
