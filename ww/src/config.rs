//! WanderWise configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main WanderWise configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language model configuration
    pub llm: LlmConfig,

    /// Image lookup configuration
    pub images: ImageConfig,

    /// Card layout configuration
    pub layout: LayoutConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Validate configuration before starting a chat
    ///
    /// Checks that the API key environment variables the configured providers
    /// need are set. Call this early to fail fast with a clear message.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }

        if self.images.provider != "none" && std::env::var(&self.images.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "Image API key not found. Set the {} environment variable or use images provider 'none'.",
                self.images.api_key_env
            ));
        }

        if self.layout.columns == 0 {
            return Err(eyre::eyre!("layout.columns must be at least 1"));
        }

        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, before logging is initialized
    ///
    /// Errors are swallowed here; the full load reports them later.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::search_paths(),
        };

        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_yaml::from_str::<Self>(&content).ok())
            .and_then(|config| config.log_level)
    }

    /// Project-local config first, then the user config directory
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".wanderwise.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("wanderwise").join("wanderwise.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Language model provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum output tokens per reply
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key_env: "GEM_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_tokens: 1000,
            temperature: 0.1,
            timeout_ms: 60_000,
        }
    }
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!("{} is not set", self.api_key_env))
    }
}

/// Image lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Provider name: "unsplash", or "none" to always use the fallback image
    pub provider: String,

    /// Environment variable containing the access key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Preferred photo orientation
    pub orientation: String,

    /// Image shown when a lookup fails
    #[serde(rename = "fallback-url")]
    pub fallback_url: String,

    /// Maximum lookups in flight at once
    #[serde(rename = "max-concurrent")]
    pub max_concurrent: usize,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            provider: "unsplash".to_string(),
            api_key_env: "UNSPLASH_KEY".to_string(),
            base_url: "https://api.unsplash.com".to_string(),
            orientation: "landscape".to_string(),
            fallback_url: "https://example.com/default_image.jpg".to_string(),
            max_concurrent: 4,
            timeout_ms: 15_000,
        }
    }
}

impl ImageConfig {
    /// Read the access key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!("{} is not set", self.api_key_env))
    }
}

/// Card layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of card columns
    pub columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { columns: 3 }
    }
}
