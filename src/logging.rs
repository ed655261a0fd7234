//! Logging setup for the scorebook binary.
//!
//! Events go to stderr so stdout stays clean JSON for the query results.
//! The default level is `info`, which reports each dataset load with its
//! location, size, and duration; set `RUST_LOG` to override:
//!
//! ```bash
//! RUST_LOG=debug scorebook head-to-head "Mumbai Indians" "Chennai Super Kings"
//! ```

use anyhow::{Context as _, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Initializes the logging system with stderr output.
///
/// # Errors
///
/// Returns error if the env filter cannot be built from `RUST_LOG`
pub fn init() -> Result<()> {
    // Default to INFO, allow override with RUST_LOG
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    Ok(())
}
