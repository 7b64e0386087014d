//! Gateway configuration resolved strictly at process start.
//!
//! Three external inputs feed the config; all are required before the
//! listener binds, and any failure is fatal:
//!
//! - `CONFIG_PATH` (default `config.json`) = JSON file with optional keys
//!   `openai_model` and `temperature`
//! - `SYSTEM_PROMPT_PATH` (default `system_prompt.txt`) = fixed system
//!   instruction, read once and trimmed
//! - `OPENAI_API_KEY` = credential env var (mandatory, non-empty)
//!
//! `OPENAI_BASE_URL` optionally overrides the provider endpoint, which is
//! what lets tests point the real client at a local mock server.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    config::generation_config::GenerationConfig,
    error_handler::{ConfigError, Result, must_env, validate_http_endpoint, validate_range_f32},
};

/// Model used when the config file does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Temperature used when the config file does not set one.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Provider endpoint used when `OPENAI_BASE_URL` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Default request timeout for outbound calls.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Wire shape of the JSON configuration file. Both keys are optional.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    openai_model: Option<String>,
    temperature: Option<f32>,
}

/// Immutable process-lifetime configuration of the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Everything the outbound client needs for one call.
    pub generation: GenerationConfig,

    /// Fixed system instruction sent with every generation request.
    pub system_prompt: String,
}

impl GatewayConfig {
    /// Resolve the config from the default locations and the environment.
    ///
    /// # Errors
    /// Any [`ConfigError`]: missing/unreadable files, unparsable JSON, a
    /// missing `OPENAI_API_KEY`, a malformed `OPENAI_BASE_URL`, or a
    /// temperature outside `0.0..=2.0`.
    pub fn load() -> Result<Self> {
        let config_path = path_from_env("CONFIG_PATH", "config.json");
        let prompt_path = path_from_env("SYSTEM_PROMPT_PATH", "system_prompt.txt");
        Self::load_from(&config_path, &prompt_path)
    }

    /// Resolve the config from explicit file paths plus the environment.
    pub fn load_from(config_path: &Path, prompt_path: &Path) -> Result<Self> {
        let file = read_config_file(config_path)?;
        let system_prompt = read_system_prompt(prompt_path)?;
        let api_key = must_env("OPENAI_API_KEY")?;

        let endpoint = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

        let temperature = file.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        validate_range_f32("temperature", temperature, 0.0, 2.0)?;

        let model = file
            .openai_model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        tracing::info!(
            %model,
            %endpoint,
            temperature,
            system_prompt_len = system_prompt.len(),
            "gateway configuration loaded"
        );

        Ok(Self {
            generation: GenerationConfig {
                model,
                endpoint,
                api_key,
                temperature,
                timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            },
            system_prompt,
        })
    }
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path).map_err(|_| ConfigError::UnreadableFile {
        path: path.display().to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        ConfigError::InvalidJson {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn read_system_prompt(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|_| ConfigError::UnreadableFile {
        path: path.display().to_string(),
    })?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptySystemPrompt.into());
    }
    Ok(trimmed.to_string())
}
