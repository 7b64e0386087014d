//! Shared state for all HTTP handlers.

use std::sync::Arc;

use generation_service::{
    client::GenerationClient, config::gateway_config::GatewayConfig, error_handler::Result,
    services::open_ai_service::OpenAiService,
};

/// Read-only state constructed once at startup; concurrent readers need no
/// synchronization.
pub struct AppState {
    /// Immutable gateway configuration (model, temperature, system prompt).
    pub config: GatewayConfig,
    /// The single outbound generation seam.
    pub client: Arc<dyn GenerationClient>,
}

impl AppState {
    /// Load configuration and build the real OpenAI client.
    ///
    /// # Errors
    /// Any startup `ConfigError`; fatal before the listener binds.
    pub fn boot() -> Result<Self> {
        let config = GatewayConfig::load()?;
        let client = OpenAiService::new(config.generation.clone())?;
        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }

    /// Assemble state from parts; lets tests inject a client pointed at a
    /// mock upstream or an in-process double.
    pub fn new(config: GatewayConfig, client: Arc<dyn GenerationClient>) -> Self {
        Self { config, client }
    }
}
