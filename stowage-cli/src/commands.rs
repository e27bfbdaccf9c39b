//! Command execution.

use crate::cli::{Cli, Command};
use crate::config;
use crate::error::{CliError, CliResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stowage_capacity::{Availability, CapacityCalculator, FloorPlan};
use stowage_core::{StowageConfig, StowageError, ValidationError};
use stowage_pricing::{PricingEngine, PricingRequest};

/// Invoice input: a single request or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Requests {
    One(PricingRequest),
    Many(Vec<PricingRequest>),
}

impl Requests {
    fn into_vec(self) -> Vec<PricingRequest> {
        match self {
            Requests::One(request) => vec![request],
            Requests::Many(requests) => requests,
        }
    }
}

/// Run a parsed command and return the rendered JSON output.
pub fn run(cli: &Cli) -> CliResult<String> {
    let config = config::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Capacity { plan } => {
            let plan: FloorPlan = read_json(plan)?;
            let report = calculator(&config)?.calculate(&plan);
            render(&report, cli.compact)
        }
        Command::Availability {
            plan,
            pallet_type,
            booked,
            requested,
        } => {
            let plan: FloorPlan = read_json(plan)?;
            let report = calculator(&config)?.calculate(&plan);
            let availability = Availability::check(&report, *pallet_type, *booked, *requested)
                .ok_or_else(|| {
                    StowageError::from(ValidationError::InvalidValue {
                        field: "pallet_type".to_string(),
                        reason: format!("floor plan has no estimate for {} pallets", pallet_type),
                    })
                })?;
            render(&availability, cli.compact)
        }
        Command::Quote { request } => {
            let request: PricingRequest = read_json(request)?;
            let quote = PricingEngine::new(config.pricing)?.quote(&request)?;
            render(&quote, cli.compact)
        }
        Command::Invoice {
            requests,
            reference,
        } => {
            let requests = read_json::<Requests>(requests)?.into_vec();
            let invoice = PricingEngine::new(config.pricing)?.invoice(reference.as_str(), &requests)?;
            render(&invoice, cli.compact)
        }
        Command::Config => render(&config, cli.compact),
    }
}

fn calculator(config: &StowageConfig) -> CliResult<CapacityCalculator> {
    Ok(CapacityCalculator::new(config.capacity.clone())?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn render<T: Serialize>(value: &T, compact: bool) -> CliResult<String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(CliError::Render)
}
