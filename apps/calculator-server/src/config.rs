//! Layered application configuration.
//!
//! Precedence, lowest first: compiled defaults, YAML file, `APP__*`
//! environment variables, CLI overrides.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Environment variable prefix; nesting uses `__`, e.g. `APP__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// HTTP host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
            request_timeout_secs: 30,
            body_limit_bytes: 16 * 1024,
            cors_enabled: false,
        }
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns an error if `bind_addr` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_addr))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings. `RUST_LOG`, when set, replaces `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `calculator=debug,tower_http=warn`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the YAML file at `path` (if any), then `APP__*` env vars.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or the merged configuration
    /// does not match the schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// # Errors
    /// Same as [`AppConfig::load`].
    pub fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(env_prefix).split("__"))
            .extract()
            .context("invalid configuration")
    }

    /// Apply `--port` and `-v` flags on top of the loaded configuration.
    ///
    /// # Errors
    /// Returns an error if a port override is given and `server.bind_addr` is invalid.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) -> Result<()> {
        if let Some(port) = port {
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        let cli_level = match verbose {
            0 => None,
            1 => Some(LevelFilter::INFO),
            2 => Some(LevelFilter::DEBUG),
            _ => Some(LevelFilter::TRACE),
        };
        if let Some(cli_level) = cli_level {
            self.logging.level = raise_default_level(&self.logging.level, cli_level);
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

/// Make `min` the default level of an `EnvFilter` directive string unless the
/// existing default is already as verbose. Target directives are kept.
fn raise_default_level(directives: &str, min: LevelFilter) -> String {
    let (defaults, targeted): (Vec<&str>, Vec<&str>) = directives
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .partition(|d| d.parse::<LevelFilter>().is_ok());

    let current = defaults
        .iter()
        .filter_map(|d| d.parse::<LevelFilter>().ok())
        .max();
    if current.is_some_and(|level| level >= min) {
        return directives.to_owned();
    }

    let min = min.to_string().to_ascii_lowercase();
    std::iter::once(min.as_str())
        .chain(targeted)
        .collect::<Vec<_>>()
        .join(",")
}
