//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _};

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter: `RUST_LOG` wins, otherwise `level` from config.
///
/// # Errors
/// Returns an error if `level` is not a valid `EnvFilter` directive.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level directive '{level}'")),
    }
}

/// Install the global subscriber. Output goes to stderr so stdout stays usable
/// for `--print-config` and `eval`.
///
/// # Errors
/// Returns an error if the filter is invalid or a global subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&cfg.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    match cfg.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}
