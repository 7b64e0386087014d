//! Unified error handling for `generation-service`.
//!
//! This module exposes a single top-level error type [`GenerationServiceError`]
//! for the whole library, and groups domain-specific errors in nested enums
//! ([`ConfigError`], [`ProviderError`]). Small helpers for reading/validating
//! startup inputs are provided and return the unified [`Result<T>`] alias.
//!
//! All messages include the suffix `[Generation Service]` to simplify
//! attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, GenerationServiceError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `generation-service` crate.
///
/// Variants wrap domain-specific enums (config/provider) plus the common
/// transport case. Prefer adding new sub-enums for distinct domains instead
/// of growing this type indefinitely.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GenerationServiceError {
    /// Configuration/validation errors (startup only; fatal).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream protocol errors (bad status, undecodable body, no choices).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("[Generation Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for startup configuration loading.
///
/// Keep this focused: only errors that realistically happen while resolving
/// the config file, the system prompt file, and the credential env var.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[Generation Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A required file is absent or could not be read.
    #[error("[Generation Service] missing or unreadable file: {path}")]
    UnreadableFile {
        /// Path as resolved at startup.
        path: String,
    },

    /// The configuration file is not valid JSON.
    #[error("[Generation Service] invalid JSON in {path}: {reason}")]
    InvalidJson {
        /// Path as resolved at startup.
        path: String,
        /// Human-readable parser message.
        reason: String,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[Generation Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OPENAI_BASE_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// A numeric field was outside of the allowed range.
    #[error("[Generation Service] {field} is out of range: {detail}")]
    OutOfRange {
        /// Field name (e.g., `temperature`).
        field: &'static str,
        /// Description of the expected range (e.g., `expected 0.0..=2.0`).
        detail: &'static str,
    },

    /// The system prompt file was present but blank.
    #[error("[Generation Service] system prompt must not be empty")]
    EmptySystemPrompt,
}

/* ------------------------------------------------------------------------- */
/* Provider errors                                                           */
/* ------------------------------------------------------------------------- */

/// Error enum for upstream protocol failures.
///
/// Transport-level failures live in
/// [`GenerationServiceError::HttpTransport`]; this enum covers everything the
/// provider answered with that the gateway cannot use.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Upstream returned a non-successful HTTP status.
    #[error("[Generation Service] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("[Generation Service] decode error: {0}")]
    Decode(String),

    /// Completion response carried no usable choices.
    #[error("[Generation Service] no choices in completion response")]
    EmptyChoices,
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`GenerationServiceError::Config`] with [`ConfigError::MissingVar`]
/// if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers (return unified `Result<T>`)                           */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`GenerationServiceError::Config`] with [`ConfigError::InvalidFormat`]
/// when the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Validates that a floating-point value lies within an inclusive range.
///
/// # Errors
/// Returns [`GenerationServiceError::Config`] with [`ConfigError::OutOfRange`]
/// if `value` is outside `[min, max]`.
pub fn validate_range_f32(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            detail: "expected value in inclusive range",
        }
        .into())
    }
}

/// Trims an upstream response body into a short, single-line log snippet.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 200;

    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.len() <= MAX {
        return collapsed;
    }
    let mut end = MAX;
    while end > 0 && !collapsed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &collapsed[..end])
}
