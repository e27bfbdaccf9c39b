//! Fuzz test for the pricing engine
//!
//! Feeds arbitrary JSON pricing requests through `quote` and `invoice`.
//! The engine should return Ok or Err, never panic, and every quote it
//! returns should balance.
//!
//! Run with: cargo +nightly fuzz run pricing_request_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use stowage_pricing::{PricingEngine, PricingRequest};

fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<PricingRequest>(data) else {
        return;
    };

    let engine = PricingEngine::default();
    if let Ok(quote) = engine.quote(&request) {
        assert_eq!(
            quote.base_amount - quote.volume_discount_amount - quote.tier_discount_amount,
            quote.total,
            "Quote should balance"
        );
        assert!(quote.total <= quote.base_amount, "Discounts should never raise the total");

        if let Ok(invoice) = engine.invoice("FUZZ", std::slice::from_ref(&request)) {
            assert_eq!(invoice.total, invoice.taxable_amount + invoice.tax_amount);
        }
    }
});
