use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of failure codes surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NullId,
    CategoryNotValid,
    CategoryAlreadyInUse,
    CategoryNotFound,
    ProductNotValid,
    ProductAlreadyInUse,
    ProductNotFound,
    PersistenceFailure,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NullId => "NULL_ID",
            ErrorCode::CategoryNotValid => "CATEGORY_NOT_VALID",
            ErrorCode::CategoryAlreadyInUse => "CATEGORY_ALREADY_IN_USE",
            ErrorCode::CategoryNotFound => "CATEGORY_NOT_FOUND",
            ErrorCode::ProductNotValid => "PRODUCT_NOT_VALID",
            ErrorCode::ProductAlreadyInUse => "PRODUCT_ALREADY_IN_USE",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::PersistenceFailure => "PERSISTENCE_FAILURE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one error kind of the service layer.
///
/// `errors` holds per-field validation messages and is empty for every other failure.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct InventoryError {
    pub code: ErrorCode,
    pub message: String,
    pub errors: Vec<String>,
}

impl InventoryError {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self { code, message: message.into(), errors: Vec::new() }
    }

    pub fn with_errors(message: impl Into<String>, code: ErrorCode, errors: Vec<String>) -> Self {
        Self { code, message: message.into(), errors }
    }

    pub fn null_id() -> Self {
        Self::new("ID should not be null", ErrorCode::NullId)
    }

    pub fn persistence(detail: impl fmt::Display) -> Self {
        Self::new(format!("persistence failure: {detail}"), ErrorCode::PersistenceFailure)
    }
}

impl From<models::errors::ModelError> for InventoryError {
    fn from(e: models::errors::ModelError) -> Self {
        Self::persistence(e)
    }
}
