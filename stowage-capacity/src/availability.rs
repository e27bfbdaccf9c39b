//! Remaining capacity for new bookings against a capacity estimate.

use crate::CapacityReport;
use serde::{Deserialize, Serialize};
use stowage_core::PalletType;

/// Pallet availability for one pallet type on a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub pallet_type: PalletType,
    pub max_pallets: u64,
    pub booked: u64,
    pub remaining: u64,
    pub requested: u64,
    pub fits: bool,
    /// Share of capacity already booked, 0..=100 (may exceed 100 when overbooked)
    pub utilization_percent: f64,
}

impl Availability {
    /// Check whether `requested` more pallets fit next to `booked` ones.
    ///
    /// Returns None when the report has no estimate for the pallet type.
    pub fn check(
        report: &CapacityReport,
        pallet_type: PalletType,
        booked: u64,
        requested: u64,
    ) -> Option<Self> {
        let capacity = report.for_pallet(pallet_type)?;
        let max_pallets = capacity.max_pallets;
        let remaining = max_pallets.saturating_sub(booked);

        Some(Self {
            pallet_type,
            max_pallets,
            booked,
            remaining,
            requested,
            fits: requested <= remaining,
            utilization_percent: utilization(booked as f64, max_pallets as f64),
        })
    }
}

/// Floor-area availability for bookings sold per square foot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaAvailability {
    pub storage_sq_ft: f64,
    pub booked_sq_ft: f64,
    pub remaining_sq_ft: f64,
    pub requested_sq_ft: f64,
    pub fits: bool,
    pub utilization_percent: f64,
}

impl AreaAvailability {
    /// Check whether `requested_sq_ft` more square feet fit next to the
    /// booked area. Negative or non-finite inputs count as 0.
    pub fn check(report: &CapacityReport, booked_sq_ft: f64, requested_sq_ft: f64) -> Self {
        let storage_sq_ft = report.storage_area_sq_ft();
        let booked_sq_ft = stowage_core::non_negative(booked_sq_ft);
        let requested_sq_ft = stowage_core::non_negative(requested_sq_ft);
        let remaining_sq_ft = stowage_core::non_negative(storage_sq_ft - booked_sq_ft);

        Self {
            storage_sq_ft,
            booked_sq_ft,
            remaining_sq_ft,
            requested_sq_ft,
            fits: requested_sq_ft <= remaining_sq_ft,
            utilization_percent: utilization(booked_sq_ft, storage_sq_ft),
        }
    }
}

fn utilization(used: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    used / total * 100.0
}
