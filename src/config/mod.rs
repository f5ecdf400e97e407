//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `PASSGEN__<SECTION>__<KEY>` pattern
//!
//! Every key has a default, so the service runs with no configuration at all.

mod generator;
mod server;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generator::GeneratorConfig;
pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Password generation configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from the working directory and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{PASSGEN_PROFILE}.toml` (if `PASSGEN_PROFILE` is set)
    /// 3. Environment variables with `PASSGEN__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let profile =
            std::env::var("PASSGEN_PROFILE").unwrap_or_else(|_| "development".to_string());

        Self::load_from(Path::new("config"), &profile, true)
    }

    /// Load configuration from `dir`, optionally applying environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the result is invalid.
    pub fn load_from(dir: &Path, profile: &str, with_env: bool) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(profile)).required(false));

        if with_env {
            // PASSGEN__SERVER__PORT=8080 -> server.port = 8080
            builder = builder.add_source(
                Environment::with_prefix("PASSGEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let app_config: Self = builder.build()?.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.generator.validate()?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got {:?}",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
