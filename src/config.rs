use std::{env, path::PathBuf};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_notification::EmailConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built client bundle served for every path the API does not handle
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (SMTP_HOST, SMTP_PASSWORD, CONTACT_ADDRESS, ...)
    /// 2. Environment variables (PORTFOLIO__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // No try_parsing: a password like "007" must keep its exact text
        builder = builder.add_source(Environment::with_prefix("PORTFOLIO").separator("__"));

        for (var, key) in [
            ("SMTP_HOST", "email.smtp_host"),
            ("SMTP_PORT", "email.smtp_port"),
            ("SMTP_USERNAME", "email.smtp_username"),
            ("SMTP_PASSWORD", "email.smtp_password"),
            ("CONTACT_ADDRESS", "email.contact_address"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp_host.is_empty() {
            return Err("SMTP host must be set".to_string());
        }
        if self.email.smtp_port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }
        if !self.email.has_valid_contact_address() {
            return Err(format!(
                "Contact address {:?} is not a valid email address",
                self.email.contact_address
            ));
        }
        if self.email.smtp_username.is_empty() != self.email.smtp_password.is_empty() {
            return Err("SMTP username and password must be set together".to_string());
        }
        if self.email.timeout_secs == 0 {
            return Err("SMTP timeout must be at least 1 second".to_string());
        }
        Ok(())
    }
}
