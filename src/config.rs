//! Environment-driven configuration.
//!
//! Connection and server settings are resolved once at startup from
//! environment variables with fixed fallbacks, then carried around as
//! structured values. Nothing else in the crate reads the environment.

use std::env;
use std::fmt;

/// Error type for configuration resolution
#[derive(Debug, Clone)]
pub enum ConfigError {
    InvalidPort(String),
    UnknownMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => {
                write!(f, "Invalid port value '{}'", raw)
            }
            ConfigError::UnknownMode(raw) => {
                write!(
                    f,
                    "Unknown dashboard mode '{}' (expected 'static' or 'interactive')",
                    raw
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// PostgreSQL connection settings.
///
/// Resolved from `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, and
/// `DB_PASSWORD`; each falls back to the reference deployment default
/// (the host default is the compose service name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl Default for DbSettings {
    fn default() -> Self {
        DbSettings {
            host: "db".to_string(),
            port: 5432,
            dbname: "sales".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
        }
    }
}

impl DbSettings {
    /// Resolve settings from `DB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = DbSettings::default();

        let port = match env::var("DB_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => defaults.port,
        };

        Ok(DbSettings {
            host: env::var("DB_HOST").unwrap_or(defaults.host),
            port,
            dbname: env::var("DB_NAME").unwrap_or(defaults.dbname),
            user: env::var("DB_USER").unwrap_or(defaults.user),
            password: env::var("DB_PASSWORD").unwrap_or(defaults.password),
        })
    }

    /// Assemble the connection URL.
    ///
    /// This is the only place the URL is built; call sites never
    /// interpolate credentials themselves.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}

/// Dashboard operating mode.
///
/// Selects when the report catalog runs, not what it computes: both modes
/// share the same canonical report set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardMode {
    /// Compute every report once at startup; serve the rendered page
    /// unchanged for the process lifetime.
    Static,
    /// Recompute the reports synchronously on each page request.
    Interactive,
}

impl DashboardMode {
    pub fn from_str(raw: &str) -> Result<Self, ConfigError> {
        match raw.to_lowercase().as_str() {
            "static" => Ok(DashboardMode::Static),
            "interactive" => Ok(DashboardMode::Interactive),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }

    /// Resolve the mode from `DASHBOARD_MODE` (default: static).
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var("DASHBOARD_MODE") {
            Ok(raw) => Self::from_str(&raw),
            Err(_) => Ok(DashboardMode::Static),
        }
    }

    /// Reference default port for each mode.
    pub fn default_port(&self) -> u16 {
        match self {
            DashboardMode::Static => 8010,
            DashboardMode::Interactive => 8050,
        }
    }
}

impl fmt::Display for DashboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DashboardMode::Static => "static",
            DashboardMode::Interactive => "interactive",
        })
    }
}

/// HTTP bind settings, from `HOST`/`PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_env(mode: DashboardMode) -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => mode.default_port(),
        };

        Ok(ServerSettings {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
