use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tonic::Status;

use crate::cache::CacheError;
use crate::utils::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("not found")]
    NotFound,

    /// Backend failure reported to the client as a bad request.
    #[error("{}", .0.message())]
    Rejected(Status),

    #[error("{}", .0.message())]
    Backend(Status),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::NotFound | GatewayError::Rejected(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Backend(_) | GatewayError::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
