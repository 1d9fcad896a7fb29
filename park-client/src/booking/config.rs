//! Client configuration, read from a YAML file.
//!
//! ```yaml
//! api_base_url: http://localhost:8080
//! request_timeout_secs: 10
//! email:
//!   smtp_server: smtp.gmail.com
//!   smtp_port: 587
//!   username: bookings@example.com
//!   password: app-password
//!   from_email: bookings@example.com
//!   to_emails: [desk@example.com]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const API_BASE_URL_ENV: &str = "PARK_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Confirmation emails are only logged when absent
    pub email: Option<EmailConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            email: None,
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub to_emails: Vec<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_server: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_email: String::new(),
            to_emails: Vec::new(),
        }
    }
}

pub struct ConfigService;

impl ConfigService {
    pub fn load(config_path: &Path) -> Result<ClientConfig> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: ClientConfig =
            serde_yaml::from_str(&content).with_context(|| "Failed to parse client config YAML")?;

        Self::validate(&config)?;
        Ok(config)
    }

    pub fn load_or_default(config_path: &Path) -> ClientConfig {
        match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load client config from {:?}: {:#}", config_path, e);
                log::info!("Using default client config ({}, email disabled)", DEFAULT_API_BASE_URL);
                ClientConfig::default()
            }
        }
    }

    /// Apply `PARK_API_BASE_URL` when it is set
    pub fn apply_env_overrides(config: ClientConfig) -> ClientConfig {
        Self::with_base_url_override(config, std::env::var(API_BASE_URL_ENV).ok())
    }

    pub fn with_base_url_override(mut config: ClientConfig, base_url: Option<String>) -> ClientConfig {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            log::info!("Using API base URL from {}: {}", API_BASE_URL_ENV, base_url);
            config.api_base_url = base_url.trim().to_string();
        }
        config
    }

    fn validate(config: &ClientConfig) -> Result<()> {
        if config.api_base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("API base URL is required"));
        }
        if config.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("Request timeout must be greater than zero"));
        }

        if let Some(email) = &config.email {
            if email.username.is_empty() {
                return Err(anyhow::anyhow!("Email username is required"));
            }
            if email.password.is_empty() {
                return Err(anyhow::anyhow!("Email password is required"));
            }
            if email.from_email.is_empty() {
                return Err(anyhow::anyhow!("From email is required"));
            }
            if email.to_emails.is_empty() {
                return Err(anyhow::anyhow!("At least one recipient email is required"));
            }
        }
        Ok(())
    }
}
