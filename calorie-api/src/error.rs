use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use calorie_model::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input that deserialized fine but is out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Input that could not be turned into a request at all.
    #[error("{0}")]
    Schema(String),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Schema(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}
