use std::time::Duration;

use thiserror::Error;

use crate::model::entity::QuestionKind;

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("lesson generation is not configured")]
    Disabled,
    #[error("lesson generation timed out after {0:?}")]
    Timeout(Duration),
    #[error("lesson generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("lesson generation returned an empty response")]
    EmptyResponse,
    #[error("generated lesson is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected {expected} questions, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("generated question {0} is malformed")]
    Malformed(usize),
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("question index {index} out of range, lesson has {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("answer does not fit a {0:?} question")]
    AnswerShapeMismatch(QuestionKind),
}
