//! Application configuration helpers.
//!
//! `config.json` is optional: a missing file means defaults. When present it
//! must carry the current `schema_version` and pass validation before any
//! command runs.
use crate::catalog::{Brand, CUSTOM_BRAND_ID};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
/// Forces the command suggestion backend with the given command line.
pub const LM_COMMAND_ENV: &str = "TEANOTE_LM_COMMAND";

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub schema_version: u32,
    #[serde(default)]
    pub suggestions: SuggestConfig,
    /// Brands added to (or replacing entries of) the built-in catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_brands: Vec<Brand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestBackend {
    #[default]
    None,
    Command,
    Gemini,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestConfig {
    #[serde(default)]
    pub backend: SuggestBackend,
    /// Command line for the `command` backend; the prompt arrives on stdin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the env var holding the Gemini API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Overall HTTP timeout for the `gemini` backend.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            backend: SuggestBackend::None,
            command: None,
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Build the config used when none has been written.
pub fn default_config() -> AppConfig {
    AppConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        suggestions: SuggestConfig::default(),
        extra_brands: Vec::new(),
    }
}

/// Load and validate the config at `path`.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: AppConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    validate_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

/// Load the config at `path`, or defaults when the file does not exist.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(default_config());
    }
    load_config(path)
}

/// Persist a config to disk in a stable JSON format.
pub fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Validate the schema version, the suggestion backend and the extra brands.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {} (expected {CONFIG_SCHEMA_VERSION})",
            config.schema_version
        ));
    }
    validate_suggestions(&config.suggestions)?;
    let mut seen = BTreeSet::new();
    for brand in &config.extra_brands {
        if brand.id.trim().is_empty() {
            return Err(anyhow!("extra_brands entries must have a non-empty id"));
        }
        if brand.id == CUSTOM_BRAND_ID {
            return Err(anyhow!("brand id {CUSTOM_BRAND_ID:?} is reserved"));
        }
        if brand.name.trim().is_empty() {
            return Err(anyhow!("brand {:?} must have a non-empty name", brand.id));
        }
        if !seen.insert(brand.id.as_str()) {
            return Err(anyhow!("brand id {:?} appears twice in extra_brands", brand.id));
        }
    }
    Ok(())
}

fn validate_suggestions(suggestions: &SuggestConfig) -> Result<()> {
    if suggestions.timeout_secs == 0 {
        return Err(anyhow!("suggestions.timeout_secs must be positive"));
    }
    match suggestions.backend {
        SuggestBackend::None => {}
        SuggestBackend::Command => {
            let raw = suggestions.command.as_deref().unwrap_or_default();
            let argv = shell_words::split(raw).context("parse suggestions.command")?;
            if argv.is_empty() {
                return Err(anyhow!(
                    "suggestions.command must be set for the command backend"
                ));
            }
        }
        SuggestBackend::Gemini => {
            if suggestions.model.trim().is_empty() {
                return Err(anyhow!("suggestions.model must be non-empty"));
            }
            if suggestions.api_key_env.trim().is_empty() {
                return Err(anyhow!("suggestions.api_key_env must be non-empty"));
            }
        }
    }
    Ok(())
}

/// Apply `TEANOTE_LM_COMMAND` on top of a loaded config.
pub fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(command) = env::var(LM_COMMAND_ENV) {
        apply_lm_command(config, &command);
    }
}

fn apply_lm_command(config: &mut AppConfig, command: &str) {
    if command.trim().is_empty() {
        return;
    }
    tracing::debug!(env = LM_COMMAND_ENV, "suggestion command overridden from env");
    config.suggestions.backend = SuggestBackend::Command;
    config.suggestions.command = Some(command.to_string());
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
