//! Outbound text-generation client used by the answer gateway.
//!
//! The crate owns three concerns:
//! - loading the immutable [`config::gateway_config::GatewayConfig`] at
//!   process start (config file, system prompt file, credential env var),
//! - the [`client::GenerationClient`] seam behind which the single network
//!   call per request lives, so handlers and tests can substitute a double,
//! - the OpenAI chat-completions implementation of that seam.
//!
//! Errors are normalized via unified error types in `error_handler`.

pub mod client;
pub mod config;
pub mod error_handler;
pub mod services;
