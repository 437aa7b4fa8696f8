//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_SERVICE_*` environment variables, or a
//! config file. Every field has a default, so an empty environment still
//! yields a usable configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DatabaseConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_DATABASE_PATH: &str = "users.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

fn default_host() -> String {
    String::from(DEFAULT_HOST)
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Host is not an IP address literal.
    #[error("invalid bind host {host:?}: expected an IP address")]
    InvalidHost { host: String },
}

/// Configuration values for the running service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServiceSettings {
    /// Interface to bind.
    #[ortho_config(default = default_host())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// SQLite database file.
    #[ortho_config(default = default_database_path())]
    pub database_path: PathBuf,
    /// Milliseconds a connection waits on a locked database.
    #[ortho_config(default = DEFAULT_BUSY_TIMEOUT_MS)]
    pub busy_timeout_ms: u64,
}

impl ServiceSettings {
    /// Configured host.
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Configured database path.
    pub fn database_path(&self) -> &Path {
        self.database_path.as_path()
    }

    /// Configured lock wait.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// literal.
    ///
    /// # Examples
    /// ```
    /// use user_service::settings::ServiceSettings;
    ///
    /// let settings = ServiceSettings {
    ///     host: "127.0.0.1".to_owned(),
    ///     port: 5001,
    ///     database_path: "users.db".into(),
    ///     busy_timeout_ms: 5000,
    /// };
    /// let addr = settings.bind_addr().expect("loopback host is valid");
    /// assert_eq!(addr.to_string(), "127.0.0.1:5001");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self
            .host()
            .parse()
            .map_err(|_| SettingsError::InvalidHost {
                host: self.host().to_owned(),
            })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Storage settings derived from this configuration.
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_path()).with_busy_timeout(self.busy_timeout())
    }
}
