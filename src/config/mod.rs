use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_default_cache_dir};
use user_prompts::prompt_for_api_token;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Riot API credential sent as the `X-Riot-Token` header on every request.
    pub api_token: String,
    /// Directory where fetched match records are cached. If not specified,
    /// a platform-specific cache directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Maximum number of API requests issued per minute. Defaults to 40,
    /// the budget of a Riot development key.
    #[serde(default = "default_requests_per_minute")]
    pub max_requests_per_minute: u32,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Default API rate cap in requests per minute
fn default_requests_per_minute() -> u32 {
    crate::constants::DEFAULT_REQUESTS_PER_MINUTE
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: String::new(),
            cache_dir: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            max_requests_per_minute: default_requests_per_minute(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for an API token and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `RECAP_API_TOKEN` - Override API token
    /// - `RECAP_CACHE_DIR` - Override match cache directory
    /// - `RECAP_LOG_FILE` - Override log file path
    /// - `RECAP_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `RECAP_RATE_LIMIT` - Override maximum requests per minute (default: 40)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Handles first-time setup with user prompts
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_config_path()).await
    }

    /// Loads configuration from a specific path, applying the same
    /// environment overrides and validation as [`Config::load`].
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            // Check if the API token is provided via environment variable
            if let Ok(api_token) = std::env::var("RECAP_API_TOKEN") {
                Config {
                    api_token,
                    ..Config::default()
                }
            } else {
                let api_token = prompt_for_api_token().await?;

                let config = Config {
                    api_token,
                    ..Config::default()
                };

                config.save_to_path(config_path).await?;
                config
            }
        };

        // Override with environment variables if present
        if let Ok(api_token) = std::env::var("RECAP_API_TOKEN") {
            config.api_token = api_token;
        }

        if let Ok(cache_dir) = std::env::var("RECAP_CACHE_DIR") {
            config.cache_dir = Some(cache_dir);
        }

        if let Ok(log_file_path) = std::env::var("RECAP_LOG_FILE") {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("RECAP_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        if let Some(rate) = std::env::var("RECAP_RATE_LIMIT")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            config.max_requests_per_minute = rate;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_token,
            self.max_requests_per_minute,
            &self.log_file_path,
        )
    }

    /// Resolves the match cache directory, falling back to the
    /// platform-specific default when none is configured.
    pub fn resolved_cache_dir(&self) -> String {
        self.cache_dir
            .clone()
            .unwrap_or_else(get_default_cache_dir)
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves current configuration to a specific path.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout, with the API
    /// token redacted.
    pub async fn display() -> Result<(), AppError> {
        let config = Config::load().await?;
        println!("Config file: {}", get_config_path());
        println!("  API token: {}", redact_token(&config.api_token));
        println!("  Cache directory: {}", config.resolved_cache_dir());
        println!(
            "  Log file: {}",
            config
                .log_file_path
                .as_deref()
                .unwrap_or("<default location>")
        );
        println!("  HTTP timeout: {}s", config.http_timeout_seconds);
        println!(
            "  Rate limit: {} requests/minute",
            config.max_requests_per_minute
        );
        Ok(())
    }
}

/// Keeps the first few characters of a credential so the operator can tell
/// which key is active without exposing it.
fn redact_token(token: &str) -> String {
    if token.len() <= 8 {
        "********".to_string()
    } else {
        format!("{}…", &token[..8])
    }
}
