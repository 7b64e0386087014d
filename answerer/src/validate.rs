//! Pure request validation. No side effects, no I/O.

use thiserror::Error;

use crate::api_types::AnswerRequest;

/// Rejections reported to the caller as a client error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `question` is empty or whitespace-only.
    #[error("question must be a non-empty string")]
    EmptyQuestion,
}

/// Check the decoded request before any prompt is built or any outbound
/// call is made.
///
/// An empty context (blank string or zero fragments) is accepted: the
/// question is forwarded without grounding material.
pub fn validate(request: &AnswerRequest) -> Result<(), ValidationError> {
    if request.question.trim().is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }
    Ok(())
}
