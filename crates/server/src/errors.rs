use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::{ErrorCode, InventoryError};
use thiserror::Error;
use tracing::{error, warn};

use crate::metrics;

/// Wire shape of every failed API call
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Boundary wrapper turning `InventoryError` into a JSON response
#[derive(Debug)]
pub struct ApiError(pub InventoryError);

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self { Self(e) }
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NullId | ErrorCode::CategoryNotValid | ErrorCode::ProductNotValid => StatusCode::BAD_REQUEST,
        ErrorCode::CategoryNotFound | ErrorCode::ProductNotFound => StatusCode::NOT_FOUND,
        ErrorCode::CategoryAlreadyInUse | ErrorCode::ProductAlreadyInUse => StatusCode::CONFLICT,
        ErrorCode::PersistenceFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let InventoryError { code, message, errors } = self.0;
        let status = status_for(code);
        metrics::record_error(code.as_str());
        if status.is_server_error() {
            error!(%code, error = %message, "request failed");
        } else {
            warn!(%code, error = %message, details = errors.len(), "request rejected");
        }
        (status, Json(ErrorBody { code, message, errors })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_statuses() {
        assert_eq!(status_for(ErrorCode::NullId), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::CategoryNotValid), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::CategoryNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::ProductAlreadyInUse), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::PersistenceFailure), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn empty_detail_list_is_omitted() {
        let body = ErrorBody { code: ErrorCode::NullId, message: "ID should not be null".into(), errors: vec![] };
        let v = serde_json::to_value(body).unwrap();
        assert_eq!(v["code"], "NULL_ID");
        assert!(v.get("errors").is_none());
    }

    #[test]
    fn startup_errors_name_the_failing_stage() {
        let e = StartupError::InvalidConfig("database.url is empty".into());
        assert_eq!(e.to_string(), "invalid configuration: database.url is empty");
        let any: anyhow::Error = StartupError::Database("refused".into()).into();
        assert!(any.to_string().starts_with("database unavailable"));
    }
}
