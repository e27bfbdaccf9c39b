//! STOWAGE Pricing - Booking Quotes and Invoices
//!
//! Prices a booking from static rate tables:
//!
//! 1. base = rate x quantity x billed days
//! 2. take off the single highest volume discount the booking qualifies for
//! 3. take the membership-tier discount off the volume-adjusted amount
//! 4. round to currency precision
//!
//! The two discounts are applied one after the other, never added together.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stowage_core::{
    BookingUnit, MembershipTier, PricingConfig, PricingError, StowageResult, ValidationError,
};

mod discount;
mod invoice;

pub use discount::{percent_off, round_currency, tier_discount, volume_discount, CURRENCY_SCALE};
pub use invoice::{Invoice, InvoiceBuilder, InvoiceLine, LineKind};

// ============================================================================
// REQUEST
// ============================================================================

/// What is being booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingQuantity {
    Pallets { count: u32 },
    Area { square_feet: Decimal },
}

impl BookingQuantity {
    pub fn unit(&self) -> BookingUnit {
        match self {
            BookingQuantity::Pallets { .. } => BookingUnit::Pallet,
            BookingQuantity::Area { .. } => BookingUnit::SquareFoot,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            BookingQuantity::Pallets { count } => Decimal::from(*count),
            BookingQuantity::Area { square_feet } => *square_feet,
        }
    }
}

/// Input to a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingRequest {
    pub quantity: BookingQuantity,
    pub duration_days: u32,
    #[serde(default)]
    pub tier: MembershipTier,
    /// Volume the customer already holds, in the booking's unit
    #[serde(default)]
    pub cumulative_volume: Decimal,
}

impl PricingRequest {
    pub fn pallets(count: u32, duration_days: u32) -> Self {
        Self {
            quantity: BookingQuantity::Pallets { count },
            duration_days,
            tier: MembershipTier::None,
            cumulative_volume: Decimal::ZERO,
        }
    }

    pub fn area(square_feet: Decimal, duration_days: u32) -> Self {
        Self {
            quantity: BookingQuantity::Area { square_feet },
            duration_days,
            tier: MembershipTier::None,
            cumulative_volume: Decimal::ZERO,
        }
    }

    pub fn with_tier(mut self, tier: MembershipTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_cumulative_volume(mut self, volume: Decimal) -> Self {
        self.cumulative_volume = volume;
        self
    }

    /// Volume used for the discount lookup: prior volume plus this booking.
    pub fn qualifying_volume(&self) -> Decimal {
        self.cumulative_volume.saturating_add(self.quantity.amount())
    }

    fn validate(&self) -> StowageResult<()> {
        if self.duration_days == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_days".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let BookingQuantity::Area { square_feet } = self.quantity {
            if square_feet < Decimal::ZERO {
                return Err(ValidationError::InvalidValue {
                    field: "quantity.square_feet".to_string(),
                    reason: "must be non-negative".to_string(),
                }
                .into());
            }
        }
        if self.cumulative_volume < Decimal::ZERO {
            return Err(ValidationError::InvalidValue {
                field: "cumulative_volume".to_string(),
                reason: "must be non-negative".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

// ============================================================================
// QUOTE
// ============================================================================

/// Priced booking.
///
/// Currency amounts are rounded stage by stage so that
/// `base_amount - volume_discount_amount - tier_discount_amount == total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub currency: String,
    pub unit: BookingUnit,
    pub quantity: Decimal,
    pub duration_days: u32,
    /// Days actually billed after the minimum duration is applied
    pub billed_days: u32,
    /// Rate per unit per day
    pub rate: Decimal,
    pub base_amount: Decimal,
    pub qualifying_volume: Decimal,
    pub volume_discount_percent: Decimal,
    pub volume_discount_amount: Decimal,
    pub tier: MembershipTier,
    pub tier_discount_percent: Decimal,
    pub tier_discount_amount: Decimal,
    /// Exact discounted price of one unit for the billed days
    pub unit_price: Decimal,
    pub total: Decimal,
}

impl Quote {
    /// Sum of both discounts.
    pub fn discount_total(&self) -> Decimal {
        self.volume_discount_amount + self.tier_discount_amount
    }

    /// Amount after the volume discount, before the tier discount.
    pub fn volume_adjusted_amount(&self) -> Decimal {
        self.base_amount - self.volume_discount_amount
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Pricing engine bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a new engine, validating the configuration.
    pub fn new(config: PricingConfig) -> StowageResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a booking.
    pub fn quote(&self, request: &PricingRequest) -> StowageResult<Quote> {
        request.validate()?;

        let unit = request.quantity.unit();
        let rate = self
            .config
            .rates
            .rate(unit)
            .ok_or(PricingError::MissingRate { unit })?;

        let quantity = request.quantity.amount();
        let billed_days = request.duration_days.max(self.config.min_duration_days);
        let days = Decimal::from(billed_days);

        let base = rate
            .checked_mul(quantity)
            .and_then(|amount| amount.checked_mul(days))
            .ok_or(PricingError::Overflow {
                stage: "base amount",
            })?;

        let qualifying_volume = request.qualifying_volume();
        let volume_percent =
            volume_discount(self.config.volume_discounts.table(unit), qualifying_volume);
        let tier_percent = tier_discount(&self.config.tier_discounts, request.tier);

        let after_volume = percent_off(base, volume_percent)?;
        let after_tier = percent_off(after_volume, tier_percent)?;

        let per_unit = rate
            .checked_mul(days)
            .ok_or(PricingError::Overflow { stage: "unit price" })?;
        let unit_price = percent_off(percent_off(per_unit, volume_percent)?, tier_percent)?;

        let base_amount = round_currency(base);
        let volume_adjusted = round_currency(after_volume);
        let total = round_currency(after_tier);

        tracing::debug!(
            unit = %unit,
            quantity = %quantity,
            billed_days,
            volume_percent = %volume_percent,
            tier = %request.tier,
            total = %total,
            "Booking priced"
        );

        Ok(Quote {
            currency: self.config.currency.clone(),
            unit,
            quantity,
            duration_days: request.duration_days,
            billed_days,
            rate,
            base_amount,
            qualifying_volume,
            volume_discount_percent: volume_percent,
            volume_discount_amount: base_amount - volume_adjusted,
            tier: request.tier,
            tier_discount_percent: tier_percent,
            tier_discount_amount: volume_adjusted - total,
            unit_price,
            total,
        })
    }

    /// Price every request and build one invoice from the quotes.
    ///
    /// Any pricing failure aborts the whole invoice.
    pub fn invoice(
        &self,
        booking_reference: impl Into<String>,
        requests: &[PricingRequest],
    ) -> StowageResult<Invoice> {
        let mut builder = InvoiceBuilder::new(&self.config, booking_reference);
        for request in requests {
            builder = builder.with_quote(self.quote(request)?);
        }
        builder.build()
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
