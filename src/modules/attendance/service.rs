use chrono::NaiveDate;
use diario_auth::AuthenticatedHttpClient;
use diario_models::{AttendanceDay, AttendanceEntry, AttendanceSheet, Period, Student};
use tracing::instrument;

use crate::utils::errors::ServiceError;
use crate::validator::validate_dto;

pub struct AttendanceService;

impl AttendanceService {
    /// Grading periods of the current school year.
    #[instrument(skip(client))]
    pub async fn list_periods(client: &AuthenticatedHttpClient) -> Result<Vec<Period>, ServiceError> {
        Ok(client.get_all("frequencia/api/periodos/").await?)
    }

    /// Students on a classroom's attendance roster.
    #[instrument(skip(client))]
    pub async fn roster(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
    ) -> Result<Vec<Student>, ServiceError> {
        Ok(client
            .get_all(&format!("frequencia/api_alunos/alunos-frequencia/{classroom_id}/"))
            .await?)
    }

    /// Records (or re-records) a whole day in one request.
    #[instrument(skip(client, sheet), fields(classroom_id = sheet.classroom_id, date = %sheet.date))]
    pub async fn record_day(
        client: &AuthenticatedHttpClient,
        sheet: &AttendanceSheet,
    ) -> Result<(), ServiceError> {
        validate_dto(sheet)?;
        client
            .post_no_content("frequencia/api/frequencias/criar_bloco/", sheet)
            .await?;
        Ok(())
    }

    /// Marks already recorded for a classroom on `date`.
    #[instrument(skip(client))]
    pub async fn day(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceEntry>, ServiceError> {
        Ok(client
            .get_all(&format!(
                "frequencia/api/frequencias/aluno-frequencia/{classroom_id}/?data={date}"
            ))
            .await?)
    }

    /// Which days of a month already have attendance recorded.
    #[instrument(skip(client))]
    pub async fn month(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<AttendanceDay>, ServiceError> {
        if !(1..=12).contains(&month) || !(1..=9999).contains(&year) {
            return Err(ServiceError::Validation(format!(
                "month {year}-{month} is invalid"
            )));
        }
        Ok(client
            .get_all(&format!(
                "frequencia/api/frequencias/sala/{classroom_id}/?mes={year:04}-{month:02}"
            ))
            .await?)
    }
}
