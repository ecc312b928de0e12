//! Configuration for boards service module

use anyhow::{anyhow, Context, Result};
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Prefix for every service-specific environment variable
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Boards service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Relational backend connection string, read from `DATABASE_URL`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Upper bound of the database connection pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Tracing filter directive (e.g. "info", "boards_service=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log every SQL statement issued by the driver
    #[serde(default)]
    pub sql_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_addr: default_bind_addr(),
            max_connections: default_max_connections(),
            log_level: default_log_level(),
            sql_logging: false,
        }
    }
}

impl Config {
    /// Layered sources: built-in defaults, then `DATABASE_URL`, then
    /// `TASKBOARD_*` variables
    pub fn figment() -> Figment {
        Self::figment_with_defaults(Self::default())
    }

    /// Same layering on top of caller-provided defaults
    pub fn figment_with_defaults(defaults: Self) -> Figment {
        Figment::from(Serialized::defaults(defaults))
            .merge(Env::raw().only(&["DATABASE_URL"]))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Export variables from a `.env` file in the working directory or one
    /// of its parents. Variables already set in the process win; a missing
    /// file yields `None`.
    pub fn load_dotenv() -> Result<Option<PathBuf>> {
        match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e).context("reading .env"),
        }
    }

    /// Extract the configuration from a figment
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// The connection string, or an error naming the missing variable
    pub fn database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL is not set"))
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

fn default_max_connections() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}
