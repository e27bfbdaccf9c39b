//! STOWAGE command-line front end.
//!
//! Reads floor plans and pricing requests as JSON, runs them through the
//! capacity calculator or the pricing engine, and prints JSON results.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod telemetry;

pub use cli::{Cli, Command};
pub use error::{CliError, CliResult};
