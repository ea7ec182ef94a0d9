use diario_auth::AuthenticatedHttpClient;
use diario_models::{Report, ReportDto};
use tracing::instrument;

use crate::utils::errors::ServiceError;
use crate::validator::validate_dto;

pub struct ReportService;

impl ReportService {
    /// Reports written for a classroom in one period.
    #[instrument(skip(client))]
    pub async fn list(
        client: &AuthenticatedHttpClient,
        period_id: i64,
        classroom_id: i64,
    ) -> Result<Vec<Report>, ServiceError> {
        Ok(client
            .get_all(&format!(
                "frequencia/api/relatorios/?periodo={period_id}&sala={classroom_id}"
            ))
            .await?)
    }

    /// Replaces a report's text.
    #[instrument(skip(client, dto))]
    pub async fn update(
        client: &AuthenticatedHttpClient,
        report_id: i64,
        dto: ReportDto,
    ) -> Result<Report, ServiceError> {
        validate_dto(&dto)?;
        Ok(client
            .put(&format!("frequencia/api/relatorios/{report_id}/"), &dto)
            .await?)
    }
}
