//! # rf-config
//!
//! Layered settings for the Rusty-Forum binary:
//! built-in defaults, then an optional `rusty-forum.toml`, then
//! `RF__`-prefixed environment variables (e.g. `RF__SERVER__PORT=9000`).
//! A `.env` file, if present, is loaded into the environment first.
//!
//! Display names live under `[users]` in the settings file, e.g.
//! `"user-123" = "dicoding"`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Base name of the optional settings file in the working directory.
pub const SETTINGS_FILE: &str = "rusty-forum";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub log: LogSettings,
    /// Display names seeded into the user directory, keyed by owner id
    #[serde(default)]
    pub users: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info,rf_core=debug`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Settings {
    /// Loads `.env`, the settings file and the environment, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        let settings = defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix("RF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080_i64)?
        .set_default("log.filter", "info")?
        .set_default("log.json", false)?)
}
