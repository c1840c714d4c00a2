//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run a local instance.
//!
//! - `GATHERLY_HOST` - Bind address (default: 127.0.0.1)
//! - `GATHERLY_PORT` - Listen port (default: 3000)
//! - `GATHERLY_SESSION_IDLE_HOURS` - Idle hours before a session is
//!   expired by the sweep (default: 24)
//! - `GATHERLY_SWEEP_INTERVAL_MINUTES` - Minutes between sweep passes
//!   (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Idle hours before the sweep expires a session
    pub session_idle_hours: i64,
    /// Minutes between session sweep passes
    pub sweep_interval_minutes: u64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("GATHERLY_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GATHERLY_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("GATHERLY_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GATHERLY_PORT".to_string(), e.to_string()))?;
        let session_idle_hours = get_env_or_default("GATHERLY_SESSION_IDLE_HOURS", "24")
            .parse::<i64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("GATHERLY_SESSION_IDLE_HOURS".to_string(), e.to_string())
            })?;
        let sweep_interval_minutes = get_env_or_default("GATHERLY_SWEEP_INTERVAL_MINUTES", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "GATHERLY_SWEEP_INTERVAL_MINUTES".to_string(),
                    e.to_string(),
                )
            })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            session_idle_hours,
            sweep_interval_minutes,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Session idle timeout as a chrono duration.
    #[must_use]
    pub fn session_idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_idle_hours)
    }

    /// Sweep interval as a std duration.
    #[must_use]
    pub const fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_minutes * 60)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            session_idle_hours: 24,
            sweep_interval_minutes: 30,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

/// Get an environment variable with a fallback default.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an optional environment variable, treating empty values as absent.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
