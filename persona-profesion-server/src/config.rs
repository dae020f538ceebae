//! Service configuration - defaults, TOML file, environment
//!
//! Layers, lowest to highest precedence:
//! - built-in defaults
//! - TOML file (optional)
//! - environment variables:
//!   `PP_BIND`, `DATABASE_URL`, `PP_MAX_CONNECTIONS`,
//!   `PERSONAS_URL`, `PROFESIONES_URL`, `ESTATUS_URL`
//!
//! CLI flags are applied on top by the binary.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http::ServerConfig;

pub const DEFAULT_PERSONS_URL: &str =
    "https://microservicioine.onrender.com/api/ine/obtenerPersonas";
pub const DEFAULT_PROFESSIONS_URL: &str =
    "https://microservicioprofesiones.onrender.com/api/obtenerProfesiones";
pub const DEFAULT_STATUSES_URL: &str = "https://microservicio-estatus.onrender.com/estatus/obtenerTodos";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Full-collection endpoints of the three upstream catalogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub persons_url: String,
    pub professions_url: String,
    pub statuses_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            persons_url: DEFAULT_PERSONS_URL.to_string(),
            professions_url: DEFAULT_PROFESSIONS_URL.to_string(),
            statuses_url: DEFAULT_STATUSES_URL.to_string(),
        }
    }
}

/// Everything the service needs at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address to bind to (default: 127.0.0.1:5001)
    pub bind: SocketAddr,

    /// Allow any CORS origin (default: localhost only)
    pub cors_permissive: bool,

    /// PostgreSQL connection string; required unless running in memory
    pub database_url: Option<String>,

    pub max_connections: u32,

    pub upstream: UpstreamConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5001)),
            cors_permissive: false,
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.overlay_env(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn overlay_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(bind) = var("PP_BIND") {
            self.bind = bind.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PP_BIND",
                value: bind,
            })?;
        }
        if let Some(max) = var("PP_MAX_CONNECTIONS") {
            self.max_connections = max.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PP_MAX_CONNECTIONS",
                value: max,
            })?;
        }
        if let Some(url) = var("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(url) = var("PERSONAS_URL") {
            self.upstream.persons_url = url;
        }
        if let Some(url) = var("PROFESIONES_URL") {
            self.upstream.professions_url = url;
        }
        if let Some(url) = var("ESTATUS_URL") {
            self.upstream.statuses_url = url;
        }

        Ok(self)
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}
