//! Prompt builder: deterministic templates over question and context.
//!
//! No chunk text is truncated, escaped, or length-limited here; limits are
//! left to the caller and to the provider's own constraints.

use crate::api_types::ContextChunk;

/// Render the plain-context prompt: the context string verbatim inside a
/// delimiter block, followed by the question.
pub fn plain_prompt(question: &str, context: &str) -> String {
    format!("CONTEXT:\n---\n{context}\n---\nQUESTION: {question}\n\nANSWER:")
}

/// Render the structured-context prompt.
///
/// One block per fragment, input order preserved, 1-based position as the
/// index. With zero fragments only the question tail is emitted and the
/// model answers unassisted.
pub fn chunked_prompt(question: &str, chunks: &[ContextChunk]) -> String {
    let mut out = String::new();

    for (i, chunk) in chunks.iter().enumerate() {
        out.push_str(&format!(
            "FRAGMENT {} (SOURCE: {}): {}",
            i + 1,
            chunk.file,
            chunk.text
        ));
        out.push_str("\n\n");
    }

    out.push_str(&format!("QUESTION: {question}\n\nANSWER:"));
    out
}
