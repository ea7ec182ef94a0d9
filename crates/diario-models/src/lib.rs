//! # Diário Models
//!
//! Domain models and DTOs for the Diário Online client.
//!
//! # Modules
//!
//! - [`auth`]: Credentials and the token pair issued at login
//! - [`users`]: Logged-in user profile and role resolution
//! - [`school`]: Classrooms, students, and teachers
//! - [`attendance`]: Periods, daily attendance, lesson records, and reports
//! - [`institution`]: The school's registration data and address
//!
//! # Example
//!
//! ```ignore
//! use diario_models::{Role, UserProfile};
//!
//! let profile: UserProfile = serde_json::from_str(body)?;
//! if profile.role == Role::Teacher {
//!     println!("Bem-vindo, professor {}", profile.display_name);
//! }
//! ```

pub mod attendance;
pub mod auth;
pub mod institution;
pub mod school;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use attendance::{
    AttendanceDay, AttendanceEntry, AttendanceSheet, LessonRecord, LessonRecordDto, Period, Report,
    ReportDto,
};
pub use auth::{Credentials, TokenPair};
pub use institution::{Address, SchoolProfile, SchoolProfileDto};

pub use users::{Role, RoleFlags, UserProfile};

pub use school::{
    Classroom, ClassroomDto, ListResponse, SchoolYear, Sex, Shift, Student, StudentDto, Teacher,
    TeacherDto,
};

/// Reads a nullable string field as empty when `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
