use config::{Environment, File};
use portal_env::logger::config as logger_config;
use serde::Deserialize;

use crate::core::errors::ApplicationError;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub log: logger_config::Log,
    pub finix: Finix,
    pub fees: Fees,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            workers: 4,
        }
    }
}

/// Credentials and endpoint of the Finix payment gateway.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Finix {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub version: String,
    pub webhook_secret: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Fees {
    pub default_schedule: DefaultSchedule,
}

/// Fee schedule applied to merchants without one of their own.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DefaultSchedule {
    pub card_basis_points: i64,
    pub card_fixed_fee: i64,
    pub bank_basis_points: i64,
    pub bank_fixed_fee: i64,
    pub bank_fee_cap: Option<i64>,
    pub returned_fixed_fee: i64,
    pub dispute_fixed_fee: i64,
}

impl Default for DefaultSchedule {
    fn default() -> Self {
        Self {
            card_basis_points: 250,
            card_fixed_fee: 50,
            bank_basis_points: 75,
            bank_fixed_fee: 25,
            bank_fee_cap: Some(500),
            returned_fixed_fee: 1500,
            dispute_fixed_fee: 2500,
        }
    }
}

impl Settings {
    /// Load settings from the environment-specific config file, overridable
    /// with `PORTAL__`-prefixed environment variables
    /// (e.g. `PORTAL__SERVER__PORT=8081`).
    pub fn new() -> Result<Self, config::ConfigError> {
        let config_path = portal_env::env::config_path();

        config::Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix("PORTAL")
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        use ApplicationError::InvalidConfigurationValueError;

        if self.server.host.is_empty() {
            return Err(InvalidConfigurationValueError(
                "server host must not be empty".into(),
            ));
        }
        if self.finix.base_url.is_empty() {
            return Err(InvalidConfigurationValueError(
                "finix base_url must not be empty".into(),
            ));
        }
        if self.finix.webhook_secret.is_empty() {
            return Err(InvalidConfigurationValueError(
                "finix webhook_secret must not be empty".into(),
            ));
        }
        Ok(())
    }
}
