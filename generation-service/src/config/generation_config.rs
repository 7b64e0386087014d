/// Configuration for the outbound generation call target.
///
/// Built once by [`super::gateway_config::GatewayConfig::load`] and treated
/// as read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Model identifier string (e.g., `"gpt-4o"`).
    pub model: String,

    /// Provider base URL (e.g., `https://api.openai.com`).
    pub endpoint: String,

    /// API key used as a bearer credential.
    pub api_key: String,

    /// Sampling temperature forwarded on every call.
    pub temperature: f32,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
