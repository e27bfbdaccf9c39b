//! STOWAGE CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use stowage_cli::{commands, telemetry, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = telemetry::init_tracing(cli.verbose) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match commands::run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
