//! Daemon settings: listener address, catalog data file, log filter.
//!
//! Read from `oncotree.toml` in the working directory when it exists, then
//! overridden by `ONCOTREE_*` variables (and `RUST_LOG` for the filter).

use std::path::PathBuf;

use serde::Deserialize;

/// Settings for one `oncotreed` process.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Where the API listens. Defaults to `0.0.0.0:8080`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Source of the main type records, read once before serving.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of records; relative paths resolve against the working
    /// directory.
    pub path: PathBuf,
}

/// `tracing` output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `oncotreed=debug,tower_http=info`.
    pub filter: String,
}

impl Config {
    /// Resolve the effective settings for this process.
    ///
    /// # Errors
    ///
    /// Fails when `oncotree.toml` is unreadable or malformed, or when the
    /// merged settings have a zero port or an empty catalog path.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("oncotree.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ONCOTREE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("ONCOTREE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("ONCOTREE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("ONCOTREE_CATALOG") {
            self.catalog.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("ONCOTREE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "catalog path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Listener address in `host:port` form.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("main_types.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "oncotreed=info,oncotree=info,tower_http=debug".to_string(),
        }
    }
}

/// Why settings could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("oncotree.toml is not valid TOML")]
    Parse(#[from] toml::de::Error),
    #[error("could not read oncotree.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
