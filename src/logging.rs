//! Structured logging setup for embedding hosts
//!
//! Hosts that already install their own `tracing` subscriber can skip
//! this module entirely; the scanner only emits events, it never
//! installs a subscriber on its own.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for a host that has no subscriber yet.
///
/// `verbose` raises the crate's default level from `warn` to `debug`;
/// `log_json` switches the stderr output to JSON lines.
pub fn init_tracing(verbose: bool, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "future_dates=debug"
    } else {
        "future_dates=warn"
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support FUTURE_DATES_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("FUTURE_DATES_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("future_dates={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
