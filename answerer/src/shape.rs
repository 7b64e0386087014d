//! Tolerant shaping of structured model output.
//!
//! The model is asked for JSON but is not trusted to return it. Shaping
//! yields an explicit outcome instead of an error: a malformed or
//! unexpected reply degrades to zero paragraphs, and the reason stays
//! visible for logging. A bad model reply must never fail the request.

use std::fmt;

use serde_json::Value;

use crate::api_types::AnswerParagraph;

/// Outcome of shaping one structured model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedAnswer {
    /// The reply matched the paragraph/source contract.
    Paragraphs(Vec<AnswerParagraph>),
    /// The reply could not be used; the caller gets zero paragraphs.
    Empty(MalformedReason),
}

/// Why a reply produced no paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The content was not parseable as JSON at all.
    InvalidJson(String),
    /// Valid JSON, but neither a paragraph list nor `{"answer": [...]}`.
    UnexpectedShape,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::InvalidJson(detail) => {
                write!(f, "model reply is not valid JSON: {detail}")
            }
            MalformedReason::UnexpectedShape => {
                write!(f, "model reply JSON does not match the answer contract")
            }
        }
    }
}

/// Parse raw model content into the contracted paragraph list.
///
/// Accepted shapes, in order:
/// - a bare JSON array of `{paragraph, source}` objects,
/// - a JSON object whose `answer` key holds such an array.
/// Everything else degrades to [`ShapedAnswer::Empty`].
pub fn shape_structured(raw: &str) -> ShapedAnswer {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => return ShapedAnswer::Empty(MalformedReason::InvalidJson(e.to_string())),
    };

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("answer") {
            Some(inner @ Value::Array(_)) => inner,
            _ => return ShapedAnswer::Empty(MalformedReason::UnexpectedShape),
        },
        _ => return ShapedAnswer::Empty(MalformedReason::UnexpectedShape),
    };

    match serde_json::from_value::<Vec<AnswerParagraph>>(list) {
        Ok(paragraphs) => ShapedAnswer::Paragraphs(paragraphs),
        Err(_) => ShapedAnswer::Empty(MalformedReason::UnexpectedShape),
    }
}
