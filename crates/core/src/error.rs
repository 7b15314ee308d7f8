use std::result::Result as StdResult;

use thiserror::Error;

use crate::FieldErrors;

/// Errors that can occur in the core domain layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid tag")]
    InvalidTag,

    #[error("validation failed: {0}")]
    Validation(FieldErrors),
}

pub type Result<T> = StdResult<T, CoreError>;
