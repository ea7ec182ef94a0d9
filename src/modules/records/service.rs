use chrono::NaiveDate;
use diario_auth::AuthenticatedHttpClient;
use diario_models::{LessonRecord, LessonRecordDto};
use tracing::instrument;

use crate::utils::errors::ServiceError;
use crate::validator::validate_dto;

const RECORDS_PATH: &str = "frequencia/api/registros/";

pub struct LessonRecordService;

impl LessonRecordService {
    /// Records of a classroom whose start date falls within `from..=to`.
    #[instrument(skip(client))]
    pub async fn list(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LessonRecord>, ServiceError> {
        Ok(client
            .get_all(&format!(
                "{RECORDS_PATH}?sala={classroom_id}&data__gte={from}&data__lte={to}"
            ))
            .await?)
    }

    #[instrument(skip(client))]
    pub async fn get(client: &AuthenticatedHttpClient, record_id: i64) -> Result<LessonRecord, ServiceError> {
        Ok(client.get(&format!("{RECORDS_PATH}{record_id}/")).await?)
    }

    #[instrument(skip(client))]
    pub async fn create(
        client: &AuthenticatedHttpClient,
        dto: LessonRecordDto,
    ) -> Result<LessonRecord, ServiceError> {
        check(&dto)?;
        Ok(client.post(RECORDS_PATH, &dto).await?)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &AuthenticatedHttpClient,
        record_id: i64,
        dto: LessonRecordDto,
    ) -> Result<LessonRecord, ServiceError> {
        check(&dto)?;
        Ok(client.put(&format!("{RECORDS_PATH}{record_id}/"), &dto).await?)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &AuthenticatedHttpClient, record_id: i64) -> Result<(), ServiceError> {
        client.delete(&format!("{RECORDS_PATH}{record_id}/")).await?;
        Ok(())
    }
}

fn check(dto: &LessonRecordDto) -> Result<(), ServiceError> {
    validate_dto(dto)?;
    if dto.end < dto.start {
        return Err(ServiceError::Validation("end is before start".to_string()));
    }
    Ok(())
}
