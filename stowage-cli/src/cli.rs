//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stowage_core::PalletType;

/// stowage - warehouse floor capacity and booking pricing
#[derive(Parser, Debug)]
#[command(name = "stowage")]
#[command(version)]
#[command(about = "Estimate warehouse floor capacity, price bookings and build invoices")]
pub struct Cli {
    /// TOML configuration file; built-in defaults apply when absent
    #[arg(long, global = true, env = "STOWAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print single-line JSON instead of pretty JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate pallet capacity for a floor plan
    Capacity {
        /// Floor plan JSON file
        #[arg(value_name = "FLOOR_PLAN")]
        plan: PathBuf,
    },

    /// Check whether more pallets fit next to existing bookings
    Availability {
        /// Floor plan JSON file
        #[arg(value_name = "FLOOR_PLAN")]
        plan: PathBuf,

        #[arg(long, default_value = "standard")]
        pallet_type: PalletType,

        /// Pallets already booked on the floor
        #[arg(long, default_value_t = 0)]
        booked: u64,

        /// Pallets the new booking needs
        #[arg(long)]
        requested: u64,
    },

    /// Price a booking
    Quote {
        /// Pricing request JSON file
        #[arg(value_name = "REQUEST")]
        request: PathBuf,
    },

    /// Price one or more bookings and build an invoice
    Invoice {
        /// Pricing request JSON file: one request or an array of requests
        #[arg(value_name = "REQUESTS")]
        requests: PathBuf,

        /// Booking reference printed on the invoice
        #[arg(long)]
        reference: String,
    },

    /// Print the effective configuration
    Config,
}
