use diario_auth::AuthenticatedHttpClient;
use diario_models::{Address, SchoolProfile, SchoolProfileDto};
use tracing::instrument;

use crate::utils::errors::ServiceError;
use crate::validator::validate_dto;

const ADDRESS_PATH: &str = "escola/api/meu-endereco/";

pub struct SchoolService;

impl SchoolService {
    /// Registration data of the signed-in school.
    #[instrument(skip(client))]
    pub async fn profile(client: &AuthenticatedHttpClient) -> Result<SchoolProfile, ServiceError> {
        Ok(client.get("escola/api/minha-escola/").await?)
    }

    #[instrument(skip(client))]
    pub async fn update_profile(
        client: &AuthenticatedHttpClient,
        dto: SchoolProfileDto,
    ) -> Result<(), ServiceError> {
        validate_dto(&dto)?;
        client
            .put_no_content("escola/api/editar/minha-escola/", &dto)
            .await?;
        Ok(())
    }

    #[instrument(skip(client))]
    pub async fn address(client: &AuthenticatedHttpClient) -> Result<Address, ServiceError> {
        Ok(client.get(ADDRESS_PATH).await?)
    }

    #[instrument(skip(client))]
    pub async fn update_address(
        client: &AuthenticatedHttpClient,
        address: Address,
    ) -> Result<(), ServiceError> {
        validate_dto(&address)?;
        client.put_no_content(ADDRESS_PATH, &address).await?;
        Ok(())
    }
}
