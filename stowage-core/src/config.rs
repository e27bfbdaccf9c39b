//! Configuration types

use crate::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// CAPACITY DEFAULTS
// ============================================================================

/// Fallback geometry for capacity estimates.
///
/// Floor plans only have to carry what differs from these values: pallet
/// requests without dimensions take the standard or euro defaults, and a
/// plan without clearances takes `clearances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapacityDefaults {
    pub standard_pallet: PalletDimensions,
    pub euro_pallet: PalletDimensions,
    pub clearances: Clearances,
}

impl Default for CapacityDefaults {
    fn default() -> Self {
        Self {
            standard_pallet: PalletDimensions::STANDARD,
            euro_pallet: PalletDimensions::EURO,
            clearances: Clearances::default(),
        }
    }
}

impl CapacityDefaults {
    /// Default dimensions for a pallet type. Custom pallets have none.
    pub fn pallet(&self, pallet_type: PalletType) -> Option<PalletDimensions> {
        match pallet_type {
            PalletType::Standard => Some(self.standard_pallet),
            PalletType::Euro => Some(self.euro_pallet),
            PalletType::Custom => None,
        }
    }

    /// Validate the defaults.
    ///
    /// Validates:
    /// - every pallet dimension is finite and > 0
    /// - every clearance is finite and >= 0
    pub fn validate(&self) -> StowageResult<()> {
        for (name, dims) in [
            ("capacity.standard_pallet", &self.standard_pallet),
            ("capacity.euro_pallet", &self.euro_pallet),
        ] {
            for (axis, value) in [
                ("length", dims.length),
                ("width", dims.width),
                ("height", dims.height),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(invalid(
                        format!("{}.{}", name, axis),
                        value,
                        "pallet dimensions must be finite and greater than 0",
                    ));
                }
            }
        }

        for (axis, value) in [
            ("wall", self.clearances.wall),
            ("sprinkler", self.clearances.sprinkler),
            ("safety", self.clearances.safety),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(
                    format!("capacity.clearances.{}", axis),
                    value,
                    "clearances must be finite and non-negative",
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// PRICING CONFIGURATION
// ============================================================================

/// Per-unit daily rates. A missing rate means the unit is not offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    pub pallet_per_day: Option<Decimal>,
    pub square_foot_per_day: Option<Decimal>,
}

impl RateTable {
    pub fn rate(&self, unit: BookingUnit) -> Option<Decimal> {
        match unit {
            BookingUnit::Pallet => self.pallet_per_day,
            BookingUnit::SquareFoot => self.square_foot_per_day,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            // $0.50 per pallet per day, $0.03 per sq ft per day
            pallet_per_day: Some(Decimal::new(50, 2)),
            square_foot_per_day: Some(Decimal::new(3, 2)),
        }
    }
}

/// One step of a volume discount table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolumeDiscount {
    /// Qualifying volume at or above which the discount applies
    pub threshold: Decimal,
    /// Percentage off, 0..=100
    pub percent: Decimal,
}

impl VolumeDiscount {
    pub fn new(threshold: Decimal, percent: Decimal) -> Self {
        Self { threshold, percent }
    }
}

/// Volume discount tables, one per booking unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VolumeDiscounts {
    pub pallet: Vec<VolumeDiscount>,
    pub square_foot: Vec<VolumeDiscount>,
}

impl VolumeDiscounts {
    pub fn table(&self, unit: BookingUnit) -> &[VolumeDiscount] {
        match unit {
            BookingUnit::Pallet => &self.pallet,
            BookingUnit::SquareFoot => &self.square_foot,
        }
    }
}

impl Default for VolumeDiscounts {
    fn default() -> Self {
        Self {
            pallet: vec![
                VolumeDiscount::new(Decimal::from(50), Decimal::from(5)),
                VolumeDiscount::new(Decimal::from(100), Decimal::from(10)),
                VolumeDiscount::new(Decimal::from(500), Decimal::from(15)),
            ],
            square_foot: vec![
                VolumeDiscount::new(Decimal::from(5_000), Decimal::from(5)),
                VolumeDiscount::new(Decimal::from(10_000), Decimal::from(10)),
                VolumeDiscount::new(Decimal::from(50_000), Decimal::from(15)),
            ],
        }
    }
}

/// Percentage off per membership tier. `MembershipTier::None` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierDiscounts {
    pub bronze: Decimal,
    pub silver: Decimal,
    pub gold: Decimal,
    pub platinum: Decimal,
}

impl TierDiscounts {
    pub fn percent(&self, tier: MembershipTier) -> Decimal {
        match tier {
            MembershipTier::None => Decimal::ZERO,
            MembershipTier::Bronze => self.bronze,
            MembershipTier::Silver => self.silver,
            MembershipTier::Gold => self.gold,
            MembershipTier::Platinum => self.platinum,
        }
    }
}

impl Default for TierDiscounts {
    fn default() -> Self {
        Self {
            bronze: Decimal::from(2),
            silver: Decimal::from(5),
            gold: Decimal::from(8),
            platinum: Decimal::from(12),
        }
    }
}

/// Longest accepted payment term, ten years.
pub const MAX_PAYMENT_TERMS_DAYS: u32 = 3650;

/// Static rate tables and invoicing policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// ISO 4217 code printed on quotes and invoices
    pub currency: String,
    pub rates: RateTable,
    pub volume_discounts: VolumeDiscounts,
    pub tier_discounts: TierDiscounts,
    /// Bookings shorter than this are billed at this many days
    pub min_duration_days: u32,
    /// Tax applied to the discounted subtotal, 0..=100
    pub tax_rate_percent: Decimal,
    /// Days between invoice issue and due date
    pub payment_terms_days: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            rates: RateTable::default(),
            volume_discounts: VolumeDiscounts::default(),
            tier_discounts: TierDiscounts::default(),
            min_duration_days: 1,
            tax_rate_percent: Decimal::ZERO,
            payment_terms_days: 30,
        }
    }
}

impl PricingConfig {
    /// Apply environment overrides on top of this configuration.
    ///
    /// Environment variables:
    /// - `STOWAGE_CURRENCY`: currency code
    /// - `STOWAGE_TAX_RATE_PERCENT`: tax rate percentage
    /// - `STOWAGE_MIN_DURATION_DAYS`: minimum billable days
    /// - `STOWAGE_PAYMENT_TERMS_DAYS`: invoice payment terms
    ///
    /// Unparseable values are ignored.
    pub fn with_env_overrides(self) -> Self {
        let defaults = self;

        Self {
            currency: std::env::var("STOWAGE_CURRENCY")
                .ok()
                .map(|s| s.trim().to_ascii_uppercase())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.currency),
            tax_rate_percent: std::env::var("STOWAGE_TAX_RATE_PERCENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.tax_rate_percent),
            min_duration_days: std::env::var("STOWAGE_MIN_DURATION_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_duration_days),
            payment_terms_days: std::env::var("STOWAGE_PAYMENT_TERMS_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.payment_terms_days),
            ..defaults
        }
    }

    /// Validate the configuration.
    /// Returns Ok(()) if valid, Err(StowageError::Config) if invalid.
    ///
    /// Validates:
    /// - currency is a three-letter code
    /// - at least one rate is configured and no rate is negative
    /// - discount and tax percentages are within [0, 100]
    /// - volume thresholds are non-negative and strictly increasing
    /// - payment terms are at most `MAX_PAYMENT_TERMS_DAYS`
    pub fn validate(&self) -> StowageResult<()> {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid(
                "pricing.currency",
                &self.currency,
                "currency must be a three-letter uppercase ISO 4217 code",
            ));
        }

        if self.rates.pallet_per_day.is_none() && self.rates.square_foot_per_day.is_none() {
            return Err(StowageError::Config(ConfigError::MissingRequired {
                field: "pricing.rates".to_string(),
            }));
        }

        for (field, rate) in [
            ("pricing.rates.pallet_per_day", self.rates.pallet_per_day),
            ("pricing.rates.square_foot_per_day", self.rates.square_foot_per_day),
        ] {
            if let Some(rate) = rate {
                if rate < Decimal::ZERO {
                    return Err(invalid(field, rate, "rates must be non-negative"));
                }
            }
        }

        for (field, percent) in [
            ("pricing.tier_discounts.bronze", self.tier_discounts.bronze),
            ("pricing.tier_discounts.silver", self.tier_discounts.silver),
            ("pricing.tier_discounts.gold", self.tier_discounts.gold),
            ("pricing.tier_discounts.platinum", self.tier_discounts.platinum),
            ("pricing.tax_rate_percent", self.tax_rate_percent),
        ] {
            check_percent(field, percent)?;
        }

        for unit in [BookingUnit::Pallet, BookingUnit::SquareFoot] {
            let table = self.volume_discounts.table(unit);
            for (index, step) in table.iter().enumerate() {
                if step.threshold < Decimal::ZERO {
                    return Err(invalid(
                        format!("pricing.volume_discounts[{}].threshold", index),
                        step.threshold,
                        "thresholds must be non-negative",
                    ));
                }
                check_percent(
                    &format!("pricing.volume_discounts[{}].percent", index),
                    step.percent,
                )?;
                if index > 0 && table[index - 1].threshold >= step.threshold {
                    return Err(StowageError::Config(ConfigError::UnorderedThresholds {
                        unit,
                        index,
                    }));
                }
            }
        }

        if self.payment_terms_days > MAX_PAYMENT_TERMS_DAYS {
            return Err(invalid(
                "pricing.payment_terms_days",
                self.payment_terms_days,
                "payment terms must be at most 3650 days",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// MASTER CONFIGURATION
// ============================================================================

/// Master configuration struct. Every section falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StowageConfig {
    pub capacity: CapacityDefaults,
    pub pricing: PricingConfig,
}

impl StowageConfig {
    pub fn validate(&self) -> StowageResult<()> {
        self.capacity.validate()?;
        self.pricing.validate()
    }
}

fn check_percent(field: &str, percent: Decimal) -> StowageResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(invalid(field, percent, "percentages must be between 0 and 100"));
    }
    Ok(())
}

fn invalid(
    field: impl Into<String>,
    value: impl std::fmt::Display,
    reason: &str,
) -> StowageError {
    StowageError::Config(ConfigError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
