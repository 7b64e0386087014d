#![allow(dead_code)]

pub mod upstream_mock;

use std::sync::Arc;

use api::AppState;
use generation_service::{
    config::{gateway_config::GatewayConfig, generation_config::GenerationConfig},
    services::open_ai_service::OpenAiService,
};

pub const TEST_SYSTEM_PROMPT: &str = "You answer strictly from the provided context.";

/// Gateway config pointing the real client at the mock upstream.
pub fn test_config(base_url: &str) -> GatewayConfig {
    GatewayConfig {
        generation: GenerationConfig {
            model: "gpt-test".into(),
            endpoint: base_url.into(),
            api_key: "sk-test".into(),
            temperature: 0.1,
            timeout_secs: Some(5),
        },
        system_prompt: TEST_SYSTEM_PROMPT.into(),
    }
}

/// Router wired exactly as in production, aimed at the mock upstream.
pub fn build_test_router(base_url: &str) -> axum::Router {
    let config = test_config(base_url);
    let client =
        OpenAiService::new(config.generation.clone()).expect("test client should initialize");
    api::build_router(Arc::new(AppState::new(config, Arc::new(client))))
}
