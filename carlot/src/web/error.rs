use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use carlot_api_types::result::JsonError;
use carlot_api_types::{EmptyGroupingField, InvalidDimension};
use carlot_charts::ReportError;
use carlot_db::DbError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidDimension(#[from] InvalidDimension),
    #[error("{0}")]
    InvalidRecord(#[from] EmptyGroupingField),
    #[error("Db Error {0}")]
    Db(#[from] DbError),
    #[error("Report Error {0}")]
    Report(#[from] ReportError),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidDimension(_) | ApiError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
            ApiError::Db(DbError::RecordNotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("error {}", self);
        let e = format!("{self}");

        (self.as_status_code(), Json(JsonError { error_message: e })).into_response()
    }
}
