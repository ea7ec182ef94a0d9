use diario_auth::AuthenticatedHttpClient;
use diario_models::{Teacher, TeacherDto};
use tracing::instrument;

use crate::utils::errors::ServiceError;
use crate::validator::validate_dto;

const TEACHERS_PATH: &str = "professor/api/professores/";

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(client))]
    pub async fn list(client: &AuthenticatedHttpClient) -> Result<Vec<Teacher>, ServiceError> {
        Ok(client.get_all(TEACHERS_PATH).await?)
    }

    /// Registers a teacher account. A password is mandatory here.
    #[instrument(skip(client))]
    pub async fn create(client: &AuthenticatedHttpClient, dto: TeacherDto) -> Result<Teacher, ServiceError> {
        if dto.password.is_none() {
            return Err(ServiceError::Validation("password is required".to_string()));
        }
        validate_dto(&dto)?;
        Ok(client.post(TEACHERS_PATH, &dto).await?)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &AuthenticatedHttpClient,
        teacher_id: i64,
        dto: TeacherDto,
    ) -> Result<Teacher, ServiceError> {
        validate_dto(&dto)?;
        Ok(client
            .put(&format!("{TEACHERS_PATH}{teacher_id}/"), &dto)
            .await?)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &AuthenticatedHttpClient, teacher_id: i64) -> Result<(), ServiceError> {
        client.delete(&format!("{TEACHERS_PATH}{teacher_id}/")).await?;
        Ok(())
    }
}
