//! Tracing subscriber setup for the runner

use tracing_subscriber::EnvFilter;

/// Default filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter: explicit level first, then `RUST_LOG`, then the default
///
/// # Errors
/// Returns an error if `level` is not a valid filter directive.
pub fn build_filter(level: Option<&str>) -> anyhow::Result<EnvFilter> {
    match level {
        Some(level) => Ok(EnvFilter::try_new(level)?),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber, writing to stderr
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init(level: Option<&str>, json: bool) -> anyhow::Result<()> {
    let filter = build_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    }
    Ok(())
}
