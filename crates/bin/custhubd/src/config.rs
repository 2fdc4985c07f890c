//! Configuration loading — TOML file with environment variable overrides.
//!
//! `custhub.toml` in the working directory is optional; missing sections and
//! keys take their defaults. `CUSTHUB_*` variables (and `RUST_LOG` for the log
//! filter) win over the file.

use serde::Deserialize;

use custhub_adapter_storage_sqlite_sqlx::is_in_memory_url;

const CONFIG_FILE: &str = "custhub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Customer store location and pool size.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx `SQLite` URL; `?mode=rwc` creates the file on first start.
    pub url: String,
    pub max_connections: u32,
}

/// `tracing_subscriber::EnvFilter` directive.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Config {
    /// Read `custhub.toml`, apply process environment overrides, validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if the
    /// merged settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Overlay `CUSTHUB_*` settings looked up through `var`.
    ///
    /// Unparseable numbers are ignored and keep the current value.
    /// `CUSTHUB_BIND` (`host:port`) is applied after the separate host and
    /// port variables; `RUST_LOG` beats `CUSTHUB_LOG`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("CUSTHUB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("CUSTHUB_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(bind) = var("CUSTHUB_BIND")
            && let Some((host, port)) = bind.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(url) = var("CUSTHUB_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(max) = var("CUSTHUB_DATABASE_MAX_CONNECTIONS").and_then(|v| v.parse().ok()) {
            self.database.max_connections = max;
        }
        if let Some(filter) = var("RUST_LOG").or_else(|| var("CUSTHUB_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be non-zero"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1",
            ));
        }
        if is_in_memory_url(&self.database.url) && self.database.max_connections > 1 {
            return Err(ConfigError::Validation(
                "an in-memory database needs database.max_connections = 1",
            ));
        }
        Ok(())
    }

    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:custhub.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "custhubd=info,custhub=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse custhub.toml")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read custhub.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}
