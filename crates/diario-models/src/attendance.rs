//! Teacher-side records: daily attendance, weekly lesson records, and
//! per-period narrative reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::school::Student;

/// Grading period ("período"), numbered from 1 within the school year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Period {
    pub id: i64,
    #[serde(rename = "periodo")]
    pub number: i32,
}

impl Period {
    /// Human label: the four bimesters by name, anything else by number.
    pub fn label(&self) -> String {
        match self.number {
            1..=4 => format!("{}º Bimestre", self.number),
            n => format!("Período {n}"),
        }
    }
}

/// One student's mark for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(rename = "aluno")]
    pub student_id: i64,
    #[serde(rename = "presente")]
    pub present: bool,
    #[serde(rename = "observacao", default, deserialize_with = "crate::null_as_empty")]
    pub note: String,
}

/// A full day of attendance for a classroom, submitted in one request.
///
/// Submitting the same day again replaces the earlier marks.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AttendanceSheet {
    #[serde(rename = "sala_id")]
    pub classroom_id: i64,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "frequencias_alunos")]
    #[validate(length(min = 1))]
    pub entries: Vec<AttendanceEntry>,
}

impl AttendanceSheet {
    /// Everyone on the roster present with no note.
    pub fn all_present(classroom_id: i64, date: NaiveDate, roster: &[Student]) -> Self {
        Self {
            classroom_id,
            date,
            entries: roster
                .iter()
                .map(|student| AttendanceEntry {
                    student_id: student.id,
                    present: true,
                    note: String::new(),
                })
                .collect(),
        }
    }

    /// Sheet pre-filled from previously recorded marks; students without a
    /// mark default to present.
    pub fn from_recorded(
        classroom_id: i64,
        date: NaiveDate,
        roster: &[Student],
        recorded: &[AttendanceEntry],
    ) -> Self {
        let mut sheet = Self::all_present(classroom_id, date, roster);
        for entry in &mut sheet.entries {
            if let Some(mark) = recorded.iter().find(|r| r.student_id == entry.student_id) {
                entry.present = mark.present;
                entry.note = mark.note.clone();
            }
        }
        sheet
    }

    /// Marks a student absent. Returns `false` if the student is not on the sheet.
    pub fn mark_absent(&mut self, student_id: i64) -> bool {
        self.entry_mut(student_id)
            .map(|entry| entry.present = false)
            .is_some()
    }

    pub fn mark_present(&mut self, student_id: i64) -> bool {
        self.entry_mut(student_id)
            .map(|entry| entry.present = true)
            .is_some()
    }

    pub fn set_note(&mut self, student_id: i64, note: impl Into<String>) -> bool {
        let note = note.into();
        self.entry_mut(student_id)
            .map(|entry| entry.note = note)
            .is_some()
    }

    pub fn absent_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.present).count()
    }

    fn entry_mut(&mut self, student_id: i64) -> Option<&mut AttendanceEntry> {
        self.entries.iter_mut().find(|e| e.student_id == student_id)
    }
}

/// Whether attendance was taken on a given day of a month.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttendanceDay {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "frequencia_registrada", default)]
    pub recorded: bool,
}

/// Weekly lesson record ("registro"): practices, knowledge field, and object
/// of study for a classroom over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonRecord {
    pub id: i64,
    #[serde(rename = "sala")]
    pub classroom_id: i64,
    #[serde(rename = "data")]
    pub start: NaiveDate,
    #[serde(rename = "data_fim", default)]
    pub end: Option<NaiveDate>,
    #[serde(rename = "pratica", default, deserialize_with = "crate::null_as_empty")]
    pub practice: String,
    #[serde(rename = "campo", default, deserialize_with = "crate::null_as_empty")]
    pub field: String,
    #[serde(rename = "objeto", default, deserialize_with = "crate::null_as_empty")]
    pub object: String,
}

/// Create/update payload for a lesson record.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LessonRecordDto {
    #[serde(rename = "sala")]
    #[validate(range(min = 1))]
    pub classroom_id: i64,
    #[serde(rename = "data")]
    pub start: NaiveDate,
    #[serde(rename = "data_fim")]
    pub end: NaiveDate,
    #[serde(rename = "pratica")]
    #[validate(length(max = 5000))]
    pub practice: String,
    #[serde(rename = "campo")]
    #[validate(length(max = 5000))]
    pub field: String,
    #[serde(rename = "objeto")]
    #[validate(length(max = 5000))]
    pub object: String,
}

/// Narrative report ("relatório") about one student for one period.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(rename = "aluno")]
    pub student_id: i64,
    #[serde(rename = "periodo")]
    pub period_id: i64,
    #[serde(rename = "relatorio", default, deserialize_with = "crate::null_as_empty")]
    pub text: String,
}

/// Update payload for a report.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ReportDto {
    #[serde(rename = "relatorio")]
    #[validate(length(min = 1))]
    pub text: String,
}

impl ReportDto {
    /// Trims surrounding whitespace; a blank report fails validation.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
        }
    }
}
