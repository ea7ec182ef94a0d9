use diario_core::ApiError;

/// Error returned by the school resource services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not signed in")]
    Unauthenticated,

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        if err.is_unauthorized() {
            ServiceError::Unauthenticated
        } else {
            ServiceError::Api(err)
        }
    }
}
