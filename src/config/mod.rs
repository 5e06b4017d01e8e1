//! Configuration management for the Gateway
//!
//! Settings come from the process environment (optionally seeded from a
//! `.env` file) and can be overridden by command line flags.
//!
//! | Variable | Default | Meaning |
//! |------|------|------|
//! | `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` / `GOOGLE_API_KEY` | unset | vendor credential; empty counts as unset |
//! | `OPENAI_API_BASE` / `ANTHROPIC_API_BASE` / `GOOGLE_API_BASE` | vendor URL | base URL override |
//! | `ANTHROPIC_API_VERSION` | `2023-06-01` | `anthropic-version` header |
//! | `HOST` | `0.0.0.0` | bind address |
//! | `PORT` | `4000` | bind port |
//! | `REQUEST_TIMEOUT` | `600` | seconds per provider call |
//! | `WORKERS` | CPU count | HTTP workers |
//! | `LOG_LEVEL` / `LOG_FORMAT` | `info` / `pretty` | logging, `RUST_LOG` wins |

pub mod cli;
pub mod models;
pub mod validation;

pub use cli::Cli;
pub use models::*;
pub use validation::Validate;

use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::core::providers::ProviderType;
use crate::utils::error::{GatewayError, Result};

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Result<Self> {
        Self::load_dotenv(None)?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration the way the binary does: dotenv, environment, then flags
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::load_dotenv(cli.env_file.as_deref())?;
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut server = ServerConfig::default();
        if let Some(host) = var("HOST") {
            server.host = host;
        }
        if let Some(port) = parse_var(&var, "PORT")? {
            server.port = port;
        }
        if let Some(timeout) = parse_var(&var, "REQUEST_TIMEOUT")? {
            server.request_timeout = timeout;
        }
        server.workers = parse_var(&var, "WORKERS")?;

        let mut providers = ProvidersConfig {
            timeout: server.request_timeout,
            ..ProvidersConfig::default()
        };
        for provider_type in ProviderType::ALL {
            let prefix = provider_type.name().to_uppercase();
            let entry = providers.get_mut(provider_type);
            entry.api_key = var(&format!("{}_API_KEY", prefix));
            entry.api_base = var(&format!("{}_API_BASE", prefix));
        }
        providers.anthropic.api_version = var("ANTHROPIC_API_VERSION");

        let mut logging = LoggingConfig::default();
        if let Some(level) = var("LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(format) = parse_var(&var, "LOG_FORMAT")? {
            logging.format = format;
        }

        let config = Self {
            server,
            providers,
            logging,
        };
        config.validate()?;

        debug!(
            providers = ?config.providers.configured().iter().map(|(t, _)| t.name()).collect::<Vec<_>>(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Apply command line overrides
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(timeout) = cli.request_timeout {
            self.server.request_timeout = timeout;
            self.providers.timeout = timeout;
        }
        if cli.workers.is_some() {
            self.server.workers = cli.workers;
        }
        if let Some(format) = cli.log_format {
            self.logging.format = format;
        }
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.providers.validate()
    }

    fn load_dotenv(path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => dotenvy::from_path(path).map(|_| ()).map_err(|e| {
                GatewayError::Config(format!("Failed to load {}: {}", path.display(), e))
            }),
            // A missing .env is fine
            None => {
                dotenvy::dotenv().ok();
                Ok(())
            }
        }
    }
}

fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                GatewayError::Config(format!("Invalid value for {}: '{}' ({})", key, raw, e))
            })
        })
        .transpose()
}
