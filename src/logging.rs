//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr. `RUST_LOG` takes
//! precedence over the configured directives.

use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parse a filter directive such as `"info"` or `"quantumnexus=debug,warn"`
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| Error::Logging(format!("Invalid filter directive '{}': {}", directive, e)))
}

/// Install the global subscriber for the requested verbosity
///
/// Keeps an already-installed global subscriber in place.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    // The configured directive must be valid even when RUST_LOG overrides it
    let configured = build_filter(config.directive(verbose))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.use_ansi())
        .with_target(false)
        .try_init();

    if installed.is_err() {
        debug!("Global subscriber already installed, keeping it");
    }

    Ok(())
}
