//! # Application Configuration
//!
//! Layered configuration loading.
//!
//! Settings are merged from, in order of increasing precedence:
//!
//! 1. `config/default.toml`
//! 2. `config/{RUN_MODE}.toml` (optional, `development` by default)
//! 3. `config/local.toml` (optional, not checked in)
//! 4. Environment variables prefixed `RATE_ENGINE`, nested keys joined
//!    with `__` (e.g. `RATE_ENGINE__DATABASE__URL`)

use crate::application::services::FallbackRateTable;
use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Quote engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Loads configuration from files and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `config/default.toml` is missing or a
    /// value fails to deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let settings = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("RATE_ENGINE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Connection pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Quote engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Per-vehicle fallback rates per km, keyed by vehicle type.
    #[serde(default = "default_fallback_rates")]
    pub fallback_rates: HashMap<String, Decimal>,
    /// Fallback rate per km for vehicle types not in the table.
    #[serde(default = "default_standard_rate")]
    pub standard_rate: Decimal,
}

impl EngineConfig {
    /// Builds the fallback rate table the transport quoter uses.
    #[must_use]
    pub fn rate_table(&self) -> FallbackRateTable {
        FallbackRateTable::new(self.fallback_rates.clone(), self.standard_rate)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_rates: default_fallback_rates(),
            standard_rate: default_standard_rate(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

const fn default_max_connections() -> u32 {
    5
}

fn default_fallback_rates() -> HashMap<String, Decimal> {
    HashMap::from([
        ("sedan".to_owned(), Decimal::new(25, 1)),
        ("hiace".to_owned(), Decimal::new(30, 1)),
        ("coaster".to_owned(), Decimal::new(375, 2)),
        ("gmc".to_owned(), Decimal::new(40, 1)),
    ])
}

fn default_standard_rate() -> Decimal {
    Decimal::new(30, 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn minimal_file_gets_defaults() {
        let cfg = parse(
            r#"
            [server]
            [database]
            url = "postgres://localhost/rates"
            "#,
        );
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.engine.standard_rate, Decimal::new(30, 1));
        assert_eq!(
            cfg.engine.fallback_rates.get("sedan"),
            Some(&Decimal::new(25, 1))
        );
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            [database]
            url = "postgres://localhost/rates"
            max_connections = 20
            [engine]
            standard_rate = "5.0"
            [engine.fallback_rates]
            sedan = "2.0"
            limo = "6.5"
            "#,
        );
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.database.max_connections, 20);
        assert_eq!(cfg.engine.standard_rate, Decimal::new(50, 1));
        assert_eq!(
            cfg.engine.fallback_rates.get("limo"),
            Some(&Decimal::new(65, 1))
        );
    }

    #[test]
    fn rate_table_reflects_configured_rates() {
        let cfg = parse(
            r#"
            [server]
            [database]
            url = "postgres://localhost/rates"
            [engine]
            standard_rate = "4.0"
            [engine.fallback_rates]
            Sedan = "2.0"
            "#,
        );
        let table = cfg.engine.rate_table();
        assert_eq!(table.rate_for("sedan"), Decimal::new(20, 1));
        assert_eq!(table.rate_for("unknown"), Decimal::new(40, 1));
    }
}
