//! Structured logging setup.
//!
//! Logs go to stderr as JSON so stdout carries only command output.
//! `RUST_LOG` overrides the default filter.

use crate::error::{CliError, CliResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "stowage_cli=info,stowage_capacity=info,stowage_pricing=info,warn";

/// Install the global subscriber. Call once, before any command runs.
pub fn init_tracing(verbose: bool) -> CliResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("stowage_cli=debug,stowage_capacity=debug,stowage_pricing=debug,info")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| CliError::Telemetry(e.to_string()))
}
