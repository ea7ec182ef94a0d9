use diario_auth::AuthenticatedHttpClient;
use diario_models::{Student, StudentDto};
use tracing::instrument;

use crate::utils::errors::ServiceError;
use crate::validator::validate_dto;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(client))]
    pub async fn list_by_classroom(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
    ) -> Result<Vec<Student>, ServiceError> {
        Ok(client
            .get_all(&format!("salas/alunos_api/alunos/{classroom_id}/"))
            .await?)
    }

    #[instrument(skip(client))]
    pub async fn get(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        student_id: i64,
    ) -> Result<Student, ServiceError> {
        Ok(client
            .get(&format!("salas/alunos_api/alunos/{classroom_id}/{student_id}/"))
            .await?)
    }

    #[instrument(skip(client))]
    pub async fn enroll(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        dto: StudentDto,
    ) -> Result<Student, ServiceError> {
        validate_dto(&dto)?;
        Ok(client
            .post(&format!("salas/alunos_api/alunos/{classroom_id}/"), &dto)
            .await?)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        student_id: i64,
        dto: StudentDto,
    ) -> Result<Student, ServiceError> {
        validate_dto(&dto)?;
        Ok(client
            .put(
                &format!("salas/alunos_api/alunos/{classroom_id}/{student_id}/"),
                &dto,
            )
            .await?)
    }

    #[instrument(skip(client))]
    pub async fn delete(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        student_id: i64,
    ) -> Result<(), ServiceError> {
        client
            .delete(&format!("salas/alunos_api/alunos/{classroom_id}/{student_id}/"))
            .await?;
        Ok(())
    }
}
