//! Fuzz test for the capacity calculator
//!
//! Feeds arbitrary JSON floor plans through `calculate` to find panics,
//! negative areas or estimates that overflow the storage area.
//!
//! Run with: cargo +nightly fuzz run floor_plan_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use stowage_capacity::{calculate, FloorPlan};

fuzz_target!(|data: &[u8]| {
    let Ok(plan) = serde_json::from_slice::<FloorPlan>(data) else {
        return;
    };

    let report = calculate(&plan);

    assert!(report.usable.area >= 0.0, "Usable area should never be negative");
    assert!(report.storage.area >= 0.0, "Storage area should never be negative");
    assert!(
        report.storage.area <= report.usable.area,
        "Storage area should be capped at the usable rectangle"
    );

    for pallet in &report.pallets {
        assert!(pallet.stack_count >= 1, "Stack count should be at least 1");
        assert_eq!(
            pallet.max_pallets,
            pallet.positions.saturating_mul(u64::from(pallet.stack_count))
        );
    }
});
