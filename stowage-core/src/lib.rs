//! STOWAGE Core - Shared Types
//!
//! Units, geometry primitives, enums, errors, and configuration shared by the
//! capacity calculator and the pricing engine. No calculation lives here.

use serde::{Deserialize, Serialize};

mod config;
mod enums;
mod error;

pub use config::*;
pub use enums::*;
pub use error::*;

// ============================================================================
// UNITS
// ============================================================================

/// Length in meters.
pub type Meters = f64;

/// Area in square meters.
pub type SquareMeters = f64;

/// Square feet in one square meter.
pub const SQ_FT_PER_SQ_M: f64 = 10.763_910_416_709_722;

/// Convert square meters to square feet.
pub fn sq_m_to_sq_ft(area: SquareMeters) -> f64 {
    area * SQ_FT_PER_SQ_M
}

/// Convert square feet to square meters.
pub fn sq_ft_to_sq_m(area: f64) -> SquareMeters {
    area / SQ_FT_PER_SQ_M
}

/// Clamp a length to a finite, non-negative value.
///
/// NaN and negative values become 0; +inf also becomes 0 so a bad input can
/// never produce an unbounded estimate.
pub fn non_negative(value: Meters) -> Meters {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Pallet dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PalletDimensions {
    pub length: Meters,
    pub width: Meters,
    pub height: Meters,
}

impl PalletDimensions {
    /// 48" x 40" GMA pallet with a 1.5m loaded height.
    pub const STANDARD: PalletDimensions = PalletDimensions {
        length: 1.2192,
        width: 1.016,
        height: 1.5,
    };

    /// 1200mm x 800mm EUR-pallet with a 1.5m loaded height.
    pub const EURO: PalletDimensions = PalletDimensions {
        length: 1.2,
        width: 0.8,
        height: 1.5,
    };

    pub fn new(length: Meters, width: Meters, height: Meters) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Horizontal area the pallet occupies. Negative sides count as 0.
    pub fn footprint(&self) -> SquareMeters {
        non_negative(self.length) * non_negative(self.width)
    }
}

/// Clearance margins in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Clearances {
    /// Kept free along every wall
    pub wall: Meters,
    /// Kept free below the sprinkler heads
    pub sprinkler: Meters,
    /// Extra safety margin along every wall
    pub safety: Meters,
}

impl Default for Clearances {
    fn default() -> Self {
        Self {
            wall: 0.5,
            sprinkler: 0.9,
            safety: 0.0,
        }
    }
}

impl Clearances {
    /// Margin removed from each side of the floor.
    pub fn perimeter(&self) -> Meters {
        non_negative(self.wall) + non_negative(self.safety)
    }
}

/// Per-field clearance overrides. Unset fields take the fallback clearances.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClearanceOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall: Option<Meters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprinkler: Option<Meters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<Meters>,
}

impl ClearanceOverrides {
    /// Fill unset fields from `fallback`.
    pub fn resolve(&self, fallback: &Clearances) -> Clearances {
        Clearances {
            wall: self.wall.unwrap_or(fallback.wall),
            sprinkler: self.sprinkler.unwrap_or(fallback.sprinkler),
            safety: self.safety.unwrap_or(fallback.safety),
        }
    }
}

impl From<Clearances> for ClearanceOverrides {
    fn from(clearances: Clearances) -> Self {
        Self {
            wall: Some(clearances.wall),
            sprinkler: Some(clearances.sprinkler),
            safety: Some(clearances.safety),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_footprint() {
        let footprint = PalletDimensions::STANDARD.footprint();
        assert!((footprint - 1.238_707_2).abs() < 1e-9);
    }

    #[test]
    fn test_negative_side_has_no_footprint() {
        assert_eq!(PalletDimensions::new(-1.0, 2.0, 1.0).footprint(), 0.0);
    }

    #[test]
    fn test_non_negative_clamps() {
        assert_eq!(non_negative(-3.0), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(f64::INFINITY), 0.0);
        assert_eq!(non_negative(2.5), 2.5);
    }

    #[test]
    fn test_clearance_perimeter_ignores_negative_margins() {
        let clearances = Clearances {
            wall: 0.5,
            sprinkler: 0.9,
            safety: -1.0,
        };
        assert_eq!(clearances.perimeter(), 0.5);
    }

    #[test]
    fn test_clearance_overrides_fill_from_fallback() {
        let fallback = Clearances {
            wall: 0.75,
            sprinkler: 2.0,
            safety: 0.25,
        };
        let overrides: ClearanceOverrides = serde_json::from_str(r#"{"wall": 1.0}"#).unwrap();
        assert_eq!(
            overrides.resolve(&fallback),
            Clearances {
                wall: 1.0,
                sprinkler: 2.0,
                safety: 0.25,
            }
        );
        assert_eq!(ClearanceOverrides::default().resolve(&fallback), fallback);
        assert_eq!(
            ClearanceOverrides::from(Clearances::default()).resolve(&fallback),
            Clearances::default()
        );
    }

    #[test]
    fn test_area_conversion() {
        let sq_ft = sq_m_to_sq_ft(100.0);
        assert!((sq_ft - 1076.391_041_670_972_2).abs() < 1e-9);
        assert!((sq_ft_to_sq_m(sq_ft) - 100.0).abs() < 1e-9);
    }
}
