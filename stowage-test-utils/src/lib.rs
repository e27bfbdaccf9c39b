//! STOWAGE Test Utilities
//!
//! Shared test infrastructure for the STOWAGE workspace:
//! - Proptest generators for floor plans, pallets and pricing requests
//! - Fixtures for the common warehouse scenarios
//! - Assertions for STOWAGE-specific invariants

pub use stowage_capacity::{CapacityReport, FloorPlan, PalletRequest, Zone};
pub use stowage_core::{
    ClearanceOverrides, Clearances, ConfigError, MembershipTier, PalletDimensions, PalletType,
    PricingConfig, PricingError, StowageError, StowageResult, TierDiscounts, ValidationError,
    VolumeDiscount, ZoneType,
};
pub use stowage_pricing::{Invoice, PricingRequest, Quote};

use rust_decimal::Decimal;

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating STOWAGE inputs.

    use super::*;
    use proptest::prelude::*;

    // === Enum Generators ===

    pub fn arb_pallet_type() -> impl Strategy<Value = PalletType> {
        prop::sample::select(PalletType::ALL.to_vec())
    }

    pub fn arb_zone_type() -> impl Strategy<Value = ZoneType> {
        prop_oneof![
            Just(ZoneType::Storage),
            Just(ZoneType::Loading),
            Just(ZoneType::Dock),
            Just(ZoneType::Office),
            Just(ZoneType::Aisle),
            Just(ZoneType::Staging),
        ]
    }

    pub fn arb_tier() -> impl Strategy<Value = MembershipTier> {
        prop::sample::select(MembershipTier::ALL.to_vec())
    }

    // === Geometry Generators ===

    /// Clearances in realistic ranges, occasionally zero.
    pub fn arb_clearances() -> impl Strategy<Value = Clearances> {
        (0.0f64..2.0, 0.0f64..1.5, 0.0f64..1.0).prop_map(|(wall, sprinkler, safety)| Clearances {
            wall,
            sprinkler,
            safety,
        })
    }

    /// Pallet dimensions with strictly positive sides.
    pub fn arb_pallet_dimensions() -> impl Strategy<Value = PalletDimensions> {
        (0.4f64..2.5, 0.4f64..2.5, 0.3f64..3.0)
            .prop_map(|(length, width, height)| PalletDimensions::new(length, width, height))
    }

    pub fn arb_zone() -> impl Strategy<Value = Zone> {
        (arb_zone_type(), 0.0f64..80.0, 0.0f64..60.0)
            .prop_map(|(zone_type, length, width)| Zone::new(zone_type, length, width))
    }

    /// A pallet request that always resolves to dimensions.
    pub fn arb_pallet_request() -> impl Strategy<Value = PalletRequest> {
        prop_oneof![
            Just(PalletRequest::new(PalletType::Standard)),
            Just(PalletRequest::new(PalletType::Euro)),
            arb_pallet_dimensions().prop_map(PalletRequest::custom),
        ]
    }

    /// Floor plan with optional zones, strips and a stacking override.
    pub fn arb_floor_plan() -> impl Strategy<Value = FloorPlan> {
        (
            0.0f64..200.0,
            0.0f64..150.0,
            0.0f64..20.0,
            prop::option::of(arb_clearances()),
            0.0f64..10.0,
            0.0f64..10.0,
            prop::collection::vec(arb_zone(), 0..5),
            prop::collection::vec(arb_pallet_request(), 0..3),
            prop::option::of(1u32..8),
        )
            .prop_map(
                |(
                    length,
                    width,
                    height,
                    clearances,
                    loading_depth,
                    dock_depth,
                    zones,
                    pallets,
                    stacking_override,
                )| FloorPlan {
                    floor_id: None,
                    length,
                    width,
                    height,
                    clearances: clearances.map(ClearanceOverrides::from).unwrap_or_default(),
                    loading_depth,
                    dock_depth,
                    zones,
                    pallets,
                    stacking_override,
                },
            )
    }

    // === Pricing Generators ===

    /// Valid pallet or area booking with prior volume.
    pub fn arb_pricing_request() -> impl Strategy<Value = PricingRequest> {
        let quantity = prop_oneof![
            (0u32..5_000).prop_map(|count| PricingRequest::pallets(count, 1)),
            (0u64..200_000, 0u32..100).prop_map(|(whole, cents)| {
                PricingRequest::area(Decimal::from(whole) + Decimal::new(cents as i64, 2), 1)
            }),
        ];

        (quantity, 1u32..730, arb_tier(), 0u32..20_000).prop_map(
            |(request, duration_days, tier, prior)| PricingRequest {
                duration_days,
                ..request
                    .with_tier(tier)
                    .with_cumulative_volume(Decimal::from(prior))
            },
        )
    }

    /// Volume discount table with strictly increasing thresholds and
    /// non-decreasing percentages.
    pub fn arb_volume_table() -> impl Strategy<Value = Vec<VolumeDiscount>> {
        prop::collection::vec((1u32..1_000, 0u32..5), 0..5).prop_map(|steps| {
            let mut threshold = 0u32;
            let mut percent = 0u32;
            steps
                .into_iter()
                .map(|(gap, step)| {
                    threshold += gap;
                    percent = (percent + step).min(100);
                    VolumeDiscount::new(Decimal::from(threshold), Decimal::from(percent))
                })
                .collect()
        })
    }

    /// Generate a PricingConfig that passes validation.
    pub fn arb_valid_pricing_config() -> impl Strategy<Value = PricingConfig> {
        (
            arb_volume_table(),
            arb_volume_table(),
            prop::array::uniform4(0u32..=40),
            0u32..30,
            0u32..2_500,
        )
            .prop_map(|(pallet, square_foot, tiers, min_days, tax_bp)| {
                let mut config = PricingConfig::default();
                config.volume_discounts.pallet = pallet;
                config.volume_discounts.square_foot = square_foot;
                config.tier_discounts = TierDiscounts {
                    bronze: Decimal::from(tiers[0]),
                    silver: Decimal::from(tiers[1]),
                    gold: Decimal::from(tiers[2]),
                    platinum: Decimal::from(tiers[3]),
                };
                config.min_duration_days = min_days;
                config.tax_rate_percent = Decimal::new(tax_bp as i64, 2);
                config
            })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built fixtures for common warehouse scenarios.

    use super::*;

    /// 50 x 30 m floor with a 10 m ceiling and default clearances,
    /// estimating standard pallets.
    pub fn example_floor() -> FloorPlan {
        FloorPlan::new(50.0, 30.0, 10.0)
            .with_floor_id("example-floor")
            .with_pallets(vec![PalletRequest::new(PalletType::Standard)])
    }

    /// Standard pallets that fit on `example_floor`.
    pub const EXAMPLE_FLOOR_STANDARD_PALLETS: u64 = 6882;

    /// Example floor split into storage, a dock and an office.
    pub fn zoned_floor() -> FloorPlan {
        FloorPlan::new(50.0, 30.0, 10.0)
            .with_floor_id("zoned-floor")
            .with_zones(vec![
                Zone::new(ZoneType::Storage, 40.0, 29.0).named("racking"),
                Zone::new(ZoneType::Dock, 9.0, 10.0).at(40.0, 0.0),
                Zone::new(ZoneType::Office, 9.0, 5.0).at(40.0, 10.0),
            ])
    }

    /// Floor too small to hold anything once clearances are taken.
    pub fn closet_floor() -> FloorPlan {
        FloorPlan::new(0.8, 0.8, 2.0)
    }

    /// Gold member booking 100 pallets for 30 days.
    pub fn gold_pallet_booking() -> PricingRequest {
        PricingRequest::pallets(100, 30).with_tier(MembershipTier::Gold)
    }

    /// 12,000 sq ft for 10 days at no tier.
    pub fn area_booking() -> PricingRequest {
        PricingRequest::area(Decimal::from(12_000), 10)
    }

    /// Default pricing with 8.25% tax.
    pub fn taxed_pricing_config() -> PricingConfig {
        PricingConfig {
            tax_rate_percent: Decimal::new(825, 2),
            ..PricingConfig::default()
        }
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions for STOWAGE-specific invariants.

    use super::*;

    /// Assert that a StowageResult is Ok.
    #[track_caller]
    pub fn assert_ok<T: std::fmt::Debug>(result: &StowageResult<T>) {
        assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
    }

    /// Assert that a StowageResult is a Validation error.
    #[track_caller]
    pub fn assert_validation_error<T: std::fmt::Debug>(result: &StowageResult<T>) {
        match result {
            Err(StowageError::Validation(_)) => {}
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    /// Assert that a StowageResult is a Config error.
    #[track_caller]
    pub fn assert_config_error<T: std::fmt::Debug>(result: &StowageResult<T>) {
        match result {
            Err(StowageError::Config(_)) => {}
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    /// Assert that a StowageResult is a Pricing error.
    #[track_caller]
    pub fn assert_pricing_error<T: std::fmt::Debug>(result: &StowageResult<T>) {
        match result {
            Err(StowageError::Pricing(_)) => {}
            other => panic!("Expected Pricing error, got: {:?}", other),
        }
    }

    /// Assert that a quote's discounts reconcile with its total.
    #[track_caller]
    pub fn assert_quote_balances(quote: &Quote) {
        assert_eq!(
            quote.base_amount - quote.volume_discount_amount - quote.tier_discount_amount,
            quote.total,
            "Quote does not balance: {:?}",
            quote
        );
        assert!(quote.total >= Decimal::ZERO, "Negative total: {}", quote.total);
        assert!(quote.total <= quote.base_amount, "Total above base: {:?}", quote);
        assert!(quote.billed_days >= quote.duration_days);
    }

    /// Assert that invoice lines and totals reconcile.
    #[track_caller]
    pub fn assert_invoice_balances(invoice: &Invoice) {
        let line_sum: Decimal = invoice.lines.iter().map(|line| line.amount).sum();
        assert_eq!(line_sum, invoice.taxable_amount, "Lines do not sum to taxable amount");
        assert_eq!(
            invoice.subtotal - invoice.discount_total,
            invoice.taxable_amount
        );
        assert_eq!(invoice.taxable_amount + invoice.tax_amount, invoice.total);
        assert!(invoice.due_at >= invoice.issued_at);
    }

    /// Assert that no estimate claims more floor than the storage area holds.
    #[track_caller]
    pub fn assert_capacity_bounded(report: &CapacityReport) {
        assert!(
            report.storage.area <= report.usable.area + 1e-6,
            "Storage area {} exceeds usable area {}",
            report.storage.area,
            report.usable.area
        );
        for pallet in &report.pallets {
            if pallet.dimensions.is_none() {
                assert_eq!(pallet.max_pallets, 0);
            }
            assert!(pallet.stack_count >= 1, "Stack count below 1: {:?}", pallet);
            assert!(
                pallet.positions as f64 * pallet.footprint_area <= report.storage.area + 1e-6,
                "Positions overflow storage area: {:?}",
                pallet
            );
            assert_eq!(pallet.max_pallets, pallet.positions * u64::from(pallet.stack_count));
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
