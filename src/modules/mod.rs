//! School resource services.
//!
//! Each service issues requests through the session's
//! [`AuthenticatedHttpClient`](diario_auth::AuthenticatedHttpClient), so calls
//! carry whatever bearer credential the session currently holds.

pub mod attendance;
pub mod classrooms;
pub mod records;
pub mod reports;
pub mod school;
pub mod students;
pub mod teachers;

pub use self::attendance::AttendanceService;
pub use self::classrooms::ClassroomService;
pub use self::records::LessonRecordService;
pub use self::reports::ReportService;
pub use self::school::SchoolService;
pub use self::students::StudentService;
pub use self::teachers::TeacherService;
