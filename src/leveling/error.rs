use thiserror::Error;

use crate::model::StoreError;

pub type CompletionResult<T> = std::result::Result<T, CompletionError>;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("invalid completion: {0}")]
    Invalid(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CompletionError {
    pub fn invalid<S: Into<String>>(reason: S) -> Self {
        Self::Invalid(reason.into())
    }
}
