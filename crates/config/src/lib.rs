//! Configuration loading, validation, and management for Wildscribe.
//!
//! Loads configuration from `~/.wildscribe/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.wildscribe/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hugging Face Inference API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model fallback chain.
    #[serde(default)]
    pub models: ModelsConfig,

    /// Generation parameters sent with every completion request.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Retry policy for the orchestrator.
    #[serde(default)]
    pub retry: RetryConfig,

    /// Gateway configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Enrichment lookup configuration (images, papers).
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("models", &self.models)
            .field("generation", &self.generation)
            .field("retry", &self.retry)
            .field("gateway", &self.gateway)
            .field("enrichment", &self.enrichment)
            .finish()
    }
}

/// The ordered model tier: primary, then smaller fallbacks attempted on
/// resource exhaustion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default = "default_primary_model")]
    pub primary: String,

    #[serde(default = "default_secondary_model")]
    pub secondary: String,

    #[serde(default = "default_tertiary_model")]
    pub tertiary: String,
}

fn default_primary_model() -> String {
    "google/flan-ul2".into()
}
fn default_secondary_model() -> String {
    "google/flan-t5-large".into()
}
fn default_tertiary_model() -> String {
    "google/flan-t5-base".into()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_model(),
            secondary: default_secondary_model(),
            tertiary: default_tertiary_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_true")]
    pub sample: bool,
}

fn default_max_new_tokens() -> u32 {
    250
}
fn default_temperature() -> f32 {
    0.8
}
fn default_true() -> bool {
    true
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            sample: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts against the primary model per task.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Seconds to sleep between attempts.
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

fn default_retries() -> u32 {
    3
}
fn default_delay_secs() -> u64 {
    5
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            delay_secs: default_delay_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Optional third-party lookups attached to relevant answers.
#[derive(Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Pixabay API key; image search is skipped when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixabay_api_key: Option<String>,

    /// Images requested per query.
    #[serde(default = "default_images_per_query")]
    pub images_per_query: u32,

    /// Papers requested per query.
    #[serde(default = "default_papers_per_query")]
    pub papers_per_query: u32,
}

fn default_images_per_query() -> u32 {
    3
}
fn default_papers_per_query() -> u32 {
    3
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            pixabay_api_key: None,
            images_per_query: default_images_per_query(),
            papers_per_query: default_papers_per_query(),
        }
    }
}

impl std::fmt::Debug for EnrichmentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentConfig")
            .field("pixabay_api_key", &redact(&self.pixabay_api_key))
            .field("images_per_query", &self.images_per_query)
            .field("papers_per_query", &self.papers_per_query)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.wildscribe/config.toml).
    ///
    /// Also checks environment variables:
    /// - `HUGGINGFACE_API_KEY` — completion API key
    /// - `PIXABAY_API_KEY` — image search key
    /// - `WILDSCRIBE_MODEL` — primary model override
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if let Ok(key) = std::env::var("HUGGINGFACE_API_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(key) = std::env::var("PIXABAY_API_KEY") {
            config.enrichment.pixabay_api_key = Some(key);
        }
        if let Ok(model) = std::env::var("WILDSCRIBE_MODEL") {
            config.models.primary = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".wildscribe")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.temperature < 0.0 || self.generation.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "generation.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.retry.retries == 0 {
            return Err(ConfigError::ValidationError(
                "retry.retries must be at least 1".into(),
            ));
        }

        if self.models.primary.is_empty() {
            return Err(ConfigError::ValidationError(
                "models.primary must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Check if a completion API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            models: ModelsConfig::default(),
            generation: GenerationConfig::default(),
            retry: RetryConfig::default(),
            gateway: GatewayConfig::default(),
            enrichment: EnrichmentConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
