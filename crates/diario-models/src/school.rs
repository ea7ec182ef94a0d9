//! School resource models: classrooms, students, and teachers.
//!
//! Wire names follow the backend (`descricao`, `turno`, `nome`, ...); Rust
//! field names are English.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// List endpoints answer either with a bare array or a paginated page.
///
/// A page's `next` is the absolute address of the following page, `None` on
/// the last one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Page {
        results: Vec<T>,
        #[serde(default)]
        next: Option<String>,
    },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Splits into this page's items and the address of the next page.
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        match self {
            ListResponse::Page { results, next } => {
                (results, next.filter(|n| !n.trim().is_empty()))
            }
            ListResponse::Plain(items) => (items, None),
        }
    }
}

/// Classroom shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    #[serde(rename = "manha")]
    Morning,
    #[serde(rename = "tarde")]
    Afternoon,
    #[serde(rename = "integral")]
    FullTime,
}

/// School year a classroom belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolYear {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// Classroom ("sala").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Classroom {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "turno")]
    pub shift: Shift,
    #[serde(rename = "ano", default)]
    pub year_id: Option<i64>,
    #[serde(rename = "ano_descricao", default)]
    pub year_description: Option<String>,
}

/// Create/update payload for a classroom.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ClassroomDto {
    #[serde(rename = "descricao")]
    #[validate(length(min = 1, max = 100))]
    pub description: String,
    #[serde(rename = "turno")]
    pub shift: Shift,
    #[serde(rename = "ano")]
    #[validate(range(min = 1))]
    pub year_id: i64,
}

/// Student sex as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Student ("aluno") enrolled in a classroom.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_nascimento", default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "sexo", default)]
    pub sex: Option<Sex>,
}

/// Create/update payload for a student.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct StudentDto {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[serde(rename = "data_nascimento")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "sexo")]
    pub sex: Sex,
}

/// Teacher ("professor") registered by the school.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Teacher {
    pub id: i64,
    #[serde(rename = "professor_nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Create/update payload for a teacher.
///
/// `password` is required on create; on update `None` keeps the current one.
#[derive(Clone, Serialize, Validate)]
pub struct TeacherDto {
    #[serde(rename = "professor_nome")]
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub password: Option<String>,
}

impl std::fmt::Debug for TeacherDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeacherDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
