//! Error types for STOWAGE operations

use crate::BookingUnit;
use thiserror::Error;

/// Input validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Volume discount thresholds for {unit} are out of order at index {index}")]
    UnorderedThresholds { unit: BookingUnit, index: usize },
}

/// Pricing errors raised while quoting or invoicing a booking.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("No rate configured for unit {unit}")]
    MissingRate { unit: BookingUnit },

    #[error("Arithmetic overflow while computing {stage}")]
    Overflow { stage: &'static str },
}

/// Master error type for all STOWAGE errors.
#[derive(Debug, Clone, Error)]
pub enum StowageError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

/// Result type alias for STOWAGE operations.
pub type StowageResult<T> = Result<T, StowageError>;

// =============================================================================
// TESTS
// =============================================================================
