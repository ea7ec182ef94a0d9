use diario_auth::AuthenticatedHttpClient;
use diario_models::{Classroom, ClassroomDto, SchoolYear};
use tracing::instrument;

use crate::utils::errors::ServiceError;
use crate::validator::validate_dto;

pub struct ClassroomService;

impl ClassroomService {
    /// Classrooms of the current school year.
    #[instrument(skip(client))]
    pub async fn list_current(client: &AuthenticatedHttpClient) -> Result<Vec<Classroom>, ServiceError> {
        Ok(client.get_all("salas/api/salas/ano-corrente/").await?)
    }

    #[instrument(skip(client))]
    pub async fn get(client: &AuthenticatedHttpClient, classroom_id: i64) -> Result<Classroom, ServiceError> {
        Ok(client.get(&format!("salas/api/salas/{classroom_id}/")).await?)
    }

    #[instrument(skip(client))]
    pub async fn create(client: &AuthenticatedHttpClient, dto: ClassroomDto) -> Result<Classroom, ServiceError> {
        validate_dto(&dto)?;
        Ok(client.post("salas/api/salas/", &dto).await?)
    }

    #[instrument(skip(client))]
    pub async fn update(
        client: &AuthenticatedHttpClient,
        classroom_id: i64,
        dto: ClassroomDto,
    ) -> Result<Classroom, ServiceError> {
        validate_dto(&dto)?;
        Ok(client
            .patch(&format!("salas/api/edit_del_sala/{classroom_id}/"), &dto)
            .await?)
    }

    #[instrument(skip(client))]
    pub async fn delete(client: &AuthenticatedHttpClient, classroom_id: i64) -> Result<(), ServiceError> {
        client
            .delete(&format!("salas/api/edit_del_sala/{classroom_id}/"))
            .await?;
        Ok(())
    }

    /// School years a classroom can be assigned to.
    #[instrument(skip(client))]
    pub async fn list_years(client: &AuthenticatedHttpClient) -> Result<Vec<SchoolYear>, ServiceError> {
        Ok(client.get_all("salas/anos/anos/").await?)
    }
}
