//! Typed error for the answerer crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnswerError {
    /// The request failed pure validation; no outbound call was made.
    #[error(transparent)]
    Validation(#[from] crate::validate::ValidationError),

    /// The single outbound generation call failed.
    #[error("generation call failed: {0}")]
    Generation(#[from] generation_service::error_handler::GenerationServiceError),
}
