//! Narrow seam over the single outbound generation call.
//!
//! Handlers depend on [`GenerationClient`] rather than on a concrete HTTP
//! client, so tests can substitute an in-process double and the network
//! implementation stays isolated in `services`.

use std::future::Future;
use std::pin::Pin;

use crate::error_handler::GenerationServiceError;

pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, GenerationServiceError>> + Send + 'a>>;

/// One outbound generation request: the fixed system instruction plus the
/// rendered user prompt.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System instruction loaded once at startup.
    pub system: String,
    /// Fully rendered user prompt.
    pub prompt: String,
    /// Ask the provider to return a JSON-formatted payload.
    pub json_response: bool,
}

impl GenerationRequest {
    /// Request a free-form text completion.
    pub fn text(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            json_response: false,
        }
    }

    /// Request a completion constrained to a JSON payload.
    pub fn json(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            json_response: true,
        }
    }
}

/// Implementations issue exactly one provider call per request: no retry,
/// no caching, no shared mutable state.
pub trait GenerationClient: Send + Sync {
    fn generate<'a>(&'a self, request: GenerationRequest) -> GenerateFuture<'a>;
}
