use thiserror::Error;

use crate::schema::{DefinitionError, ValidationFailure};

#[derive(Error, Debug)]
pub enum DataError {
    /// Broken projection definition; fatal at startup.
    #[error("Schema definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// Rejected insert payload; reported to the caller, never fatal.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
