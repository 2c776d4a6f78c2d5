//! Configuration management for the demo server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Load the sample books and libraries at startup
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = AppConfig::default();

        let config = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .set_default("data.seed_demo_data", defaults.data.seed_demo_data)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables (e.g. CRUD_DEMO__SERVER__HOST)
            .add_source(
                Environment::with_prefix("CRUD_DEMO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Port variable used by earlier deployments
            .set_override_option("server.port", env::var("FASTAPIPORT").ok())?
            // Plain PORT wins over everything else
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Filter directive used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> String {
        format!("crud_demo_server={},tower_http=debug", self.logging.level)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { seed_demo_data: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.data.seed_demo_data);
        assert_eq!(
            config.default_log_filter(),
            "crud_demo_server=info,tower_http=debug"
        );
    }

    // The only test touching the process environment
    #[test]
    fn test_port_environment_overrides() {
        env::remove_var("PORT");
        env::set_var("FASTAPIPORT", "9123");
        assert_eq!(AppConfig::load().unwrap().server.port, 9123);

        env::set_var("PORT", "9200");
        assert_eq!(AppConfig::load().unwrap().server.port, 9200);

        env::remove_var("PORT");
        env::remove_var("FASTAPIPORT");
        assert_eq!(AppConfig::load().unwrap().server.port, 8000);
    }
}
