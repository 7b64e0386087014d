//! Public request/answer types re-used by the HTTP API layer.

use serde::{Deserialize, Serialize};

/// One retrieved document fragment with its originating source label.
///
/// Supplied by the caller as grounding material; immutable for the duration
/// of the request. Wire field `file` carries the label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextChunk {
    pub text: String,
    pub file: String,
}

/// Context supplied by the caller: one plain string, or an ordered list of
/// labeled fragments.
#[derive(Clone, Debug)]
pub enum ContextInput {
    Plain(String),
    Chunks(Vec<ContextChunk>),
}

/// A single gateway request after boundary decoding.
#[derive(Clone, Debug)]
pub struct AnswerRequest {
    /// Natural language question.
    pub question: String,
    /// Grounding material; its shape selects plain or structured mode.
    pub context: ContextInput,
}

/// One answer paragraph tied to the fragment that grounds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerParagraph {
    pub paragraph: String,
    pub source: ContextChunk,
}

/// Final answer; its shape mirrors the shape of the request context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Paragraphs(Vec<AnswerParagraph>),
}
