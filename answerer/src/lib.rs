//! Answering pipeline with a single public function.
//!
//! Public API: [`answer`]. Each request is one linear pass: validate the
//! decoded payload, render a prompt from the question and context, make
//! exactly one call through the [`GenerationClient`] seam, shape the model
//! output, and return. No retries, no intermediate state.
//!
//! The context shape selects the mode: a plain string yields a plain text
//! answer; a fragment list yields paragraph/source pairs parsed tolerantly
//! from the model's JSON reply.

mod api_types;
mod error;
mod prompt;
mod shape;
mod validate;

pub use api_types::{Answer, AnswerParagraph, AnswerRequest, ContextChunk, ContextInput};
pub use error::AnswerError;
pub use shape::{MalformedReason, ShapedAnswer};
pub use validate::ValidationError;

use generation_service::client::{GenerationClient, GenerationRequest};
use tracing::warn;

/// Answer one request through the injected generation client.
///
/// # Errors
/// - [`AnswerError::Validation`] for a blank question (no outbound call is
///   made in that case)
/// - [`AnswerError::Generation`] when the provider call fails
///
/// A malformed model reply in structured mode is NOT an error: it degrades
/// to zero paragraphs and is logged as a warning.
pub async fn answer(
    client: &dyn GenerationClient,
    system_prompt: &str,
    request: &AnswerRequest,
) -> Result<Answer, AnswerError> {
    validate::validate(request)?;

    match &request.context {
        ContextInput::Plain(context) => {
            let user_prompt = prompt::plain_prompt(&request.question, context);
            let text = client
                .generate(GenerationRequest::text(system_prompt, user_prompt))
                .await?;
            Ok(Answer::Text(text))
        }
        ContextInput::Chunks(chunks) => {
            let user_prompt = prompt::chunked_prompt(&request.question, chunks);
            let raw = client
                .generate(GenerationRequest::json(system_prompt, user_prompt))
                .await?;

            match shape::shape_structured(&raw) {
                ShapedAnswer::Paragraphs(paragraphs) => Ok(Answer::Paragraphs(paragraphs)),
                ShapedAnswer::Empty(reason) => {
                    warn!(%reason, raw_len = raw.len(), "unusable model reply; returning no paragraphs");
                    Ok(Answer::Paragraphs(Vec::new()))
                }
            }
        }
    }
}
