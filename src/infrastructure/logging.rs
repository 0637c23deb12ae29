//! Logging initialization
//!
//! Console `tracing` setup with an environment-driven filter. The library only
//! emits events; binaries opt in by calling [`init_logging`] once at startup.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging with an `info` default filter
///
/// Honors `RUST_LOG` when set. Initializing the global subscriber twice is an
/// error, so call this once from the binary entry point.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
