use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

pub(crate) fn db_err(e: DbErr) -> ModelError {
    ModelError::Db(e.to_string())
}
