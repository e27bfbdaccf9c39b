//! STOWAGE Capacity - Floor-Plan Pallet Capacity
//!
//! Estimates how many pallets of each type fit on a warehouse floor.
//! Usable floor area is derived from the plan minus clearances (or from the
//! declared storage zones), divided by the pallet footprint, and multiplied
//! by the number of levels the ceiling allows.
//!
//! This is an area-division estimate: pallets are placed axis-aligned and
//! unrotated, sizes are never mixed, and zones are not checked for overlap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stowage_core::{
    non_negative, sq_m_to_sq_ft, CapacityDefaults, ClearanceOverrides, Clearances, Meters,
    PalletDimensions, PalletType, SquareMeters, StowageResult, ZoneType,
};

mod availability;

pub use availability::{AreaAvailability, Availability};

/// Quotients within this many ULPs of an integer are snapped to it before
/// flooring, so exact divisions such as `0.3 / 0.1` are not lost to
/// representation error.
const SNAP_ULPS: f64 = 4.0;

// ============================================================================
// FLOOR PLAN INPUT
// ============================================================================

/// A declared rectangular zone on a floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Zone {
    #[serde(default)]
    pub name: Option<String>,
    pub zone_type: ZoneType,
    /// Offset of the zone's corner from the floor origin
    #[serde(default)]
    pub x: Meters,
    #[serde(default)]
    pub y: Meters,
    pub length: Meters,
    pub width: Meters,
}

impl Zone {
    pub fn new(zone_type: ZoneType, length: Meters, width: Meters) -> Self {
        Self {
            name: None,
            zone_type,
            x: 0.0,
            y: 0.0,
            length,
            width,
        }
    }

    /// Place the zone at an offset.
    pub fn at(mut self, x: Meters, y: Meters) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Name the zone.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Zone area. Negative extents count as 0.
    pub fn area(&self) -> SquareMeters {
        non_negative(self.length) * non_negative(self.width)
    }
}

/// A pallet type to estimate capacity for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PalletRequest {
    pub pallet_type: PalletType,
    /// Required for custom pallets; standard and euro fall back to defaults
    #[serde(default)]
    pub dimensions: Option<PalletDimensions>,
    /// Fixed number of levels, overriding the ceiling-derived stack count
    #[serde(default)]
    pub stacking_override: Option<u32>,
}

impl PalletRequest {
    pub fn new(pallet_type: PalletType) -> Self {
        Self {
            pallet_type,
            dimensions: None,
            stacking_override: None,
        }
    }

    pub fn custom(dimensions: PalletDimensions) -> Self {
        Self {
            pallet_type: PalletType::Custom,
            dimensions: Some(dimensions),
            stacking_override: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: PalletDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_stacking_override(mut self, levels: u32) -> Self {
        self.stacking_override = Some(levels);
        self
    }
}

/// Floor geometry for a capacity estimate. All lengths in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloorPlan {
    #[serde(default)]
    pub floor_id: Option<String>,
    pub length: Meters,
    pub width: Meters,
    /// Ceiling height
    pub height: Meters,
    /// Unset fields fall back to the calculator's default clearances
    #[serde(default)]
    pub clearances: ClearanceOverrides,
    /// Depth of the loading strip taken off the floor length
    #[serde(default)]
    pub loading_depth: Meters,
    /// Depth of the dock strip taken off the floor length
    #[serde(default)]
    pub dock_depth: Meters,
    /// When non-empty, only `Storage` zones hold pallets
    #[serde(default)]
    pub zones: Vec<Zone>,
    /// When empty, standard and euro pallets are estimated
    #[serde(default)]
    pub pallets: Vec<PalletRequest>,
    /// Applies to every pallet request that has no override of its own
    #[serde(default)]
    pub stacking_override: Option<u32>,
}

impl FloorPlan {
    /// Create a new floor plan with required fields.
    pub fn new(length: Meters, width: Meters, height: Meters) -> Self {
        Self {
            floor_id: None,
            length,
            width,
            height,
            clearances: ClearanceOverrides::default(),
            loading_depth: 0.0,
            dock_depth: 0.0,
            zones: Vec::new(),
            pallets: Vec::new(),
            stacking_override: None,
        }
    }

    pub fn with_floor_id(mut self, floor_id: impl Into<String>) -> Self {
        self.floor_id = Some(floor_id.into());
        self
    }

    /// Fix every clearance for this plan.
    pub fn with_clearances(mut self, clearances: Clearances) -> Self {
        self.clearances = clearances.into();
        self
    }

    /// Override only the clearances that are set.
    pub fn with_clearance_overrides(mut self, overrides: ClearanceOverrides) -> Self {
        self.clearances = overrides;
        self
    }

    pub fn with_loading_depth(mut self, depth: Meters) -> Self {
        self.loading_depth = depth;
        self
    }

    pub fn with_dock_depth(mut self, depth: Meters) -> Self {
        self.dock_depth = depth;
        self
    }

    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_pallets(mut self, pallets: Vec<PalletRequest>) -> Self {
        self.pallets = pallets;
        self
    }

    pub fn with_stacking_override(mut self, levels: u32) -> Self {
        self.stacking_override = Some(levels);
        self
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Floor rectangle left after clearances and loading/dock strips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsableRectangle {
    pub length: Meters,
    pub width: Meters,
    pub area: SquareMeters,
}

/// Where the storage area of an estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageSource {
    /// No zones declared; the whole usable rectangle stores pallets
    UsableRectangle,
    /// Sum of declared storage zones
    DeclaredZones,
    /// Declared storage zones exceeded the usable rectangle and were capped
    CappedZones,
}

/// Floor area available for pallets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageArea {
    pub area: SquareMeters,
    pub source: StorageSource,
}

/// Capacity estimate for one pallet request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletCapacity {
    pub pallet_type: PalletType,
    /// None for a custom request without dimensions
    pub dimensions: Option<PalletDimensions>,
    pub footprint_area: SquareMeters,
    /// Pallet positions on one level
    pub positions: u64,
    /// Levels per position, never below 1
    pub stack_count: u32,
    pub max_pallets: u64,
}

/// Full capacity estimate for a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityReport {
    pub floor_id: Option<String>,
    pub usable: UsableRectangle,
    pub storage: StorageArea,
    /// Total declared area per zone type
    pub zone_areas: BTreeMap<ZoneType, SquareMeters>,
    /// Height between floor and sprinkler clearance
    pub clear_height: Meters,
    pub pallets: Vec<PalletCapacity>,
}

impl CapacityReport {
    /// First estimate for a pallet type.
    pub fn for_pallet(&self, pallet_type: PalletType) -> Option<&PalletCapacity> {
        self.pallets.iter().find(|p| p.pallet_type == pallet_type)
    }

    /// Storage area in square feet, the unit area bookings are sold in.
    pub fn storage_area_sq_ft(&self) -> f64 {
        sq_m_to_sq_ft(self.storage.area)
    }
}

// ============================================================================
// CALCULATIONS
// ============================================================================

/// Usable floor rectangle.
///
/// width = floor width - 2 x (wall + safety)
/// length = floor length - 2 x (wall + safety) - loading depth - dock depth
///
/// Each side is clamped to 0.
pub fn usable_rectangle(
    plan: &FloorPlan,
    clearances: &Clearances,
) -> UsableRectangle {
    let margin = 2.0 * clearances.perimeter();
    let width = non_negative(non_negative(plan.width) - margin);
    let length = non_negative(
        non_negative(plan.length)
            - margin
            - non_negative(plan.loading_depth)
            - non_negative(plan.dock_depth),
    );

    UsableRectangle {
        length,
        width,
        area: length * width,
    }
}

/// Area available for pallets.
///
/// Without zones this is the usable rectangle. With zones it is the sum of
/// the declared storage zones, capped at the usable rectangle so overlapping
/// or oversized zones never count the same floor twice.
pub fn storage_area(plan: &FloorPlan, usable: &UsableRectangle) -> StorageArea {
    if plan.zones.is_empty() {
        return StorageArea {
            area: usable.area,
            source: StorageSource::UsableRectangle,
        };
    }

    let declared: SquareMeters = plan
        .zones
        .iter()
        .filter(|zone| zone.zone_type.holds_pallets())
        .map(Zone::area)
        .sum();

    if declared > usable.area {
        tracing::debug!(
            declared,
            usable = usable.area,
            "Declared storage zones exceed usable floor, capping"
        );
        StorageArea {
            area: usable.area,
            source: StorageSource::CappedZones,
        }
    } else {
        StorageArea {
            area: declared,
            source: StorageSource::DeclaredZones,
        }
    }
}

/// Pallet positions on one level: floor(area / footprint).
///
/// Zero when either the area or the footprint is not positive.
pub fn footprint_count(area: SquareMeters, footprint: SquareMeters) -> u64 {
    let area = non_negative(area);
    let footprint = non_negative(footprint);
    if area <= 0.0 || footprint <= 0.0 {
        return 0;
    }
    floor_ratio(area, footprint)
}

/// Number of pallet levels.
///
/// A manual override wins. Otherwise floor((ceiling - sprinkler) / pallet
/// height). The result is never below 1; a non-positive pallet height also
/// yields 1.
pub fn stack_count(
    ceiling: Meters,
    sprinkler: Meters,
    pallet_height: Meters,
    manual: Option<u32>,
) -> u32 {
    if let Some(levels) = manual {
        return levels.max(1);
    }

    let pallet_height = non_negative(pallet_height);
    if pallet_height <= 0.0 {
        return 1;
    }

    let levels = floor_ratio(clear_height(ceiling, sprinkler), pallet_height);
    u32::try_from(levels).unwrap_or(u32::MAX).max(1)
}

/// Height available for stacking under the sprinkler clearance.
pub fn clear_height(ceiling: Meters, sprinkler: Meters) -> Meters {
    non_negative(non_negative(ceiling) - non_negative(sprinkler))
}

fn floor_ratio(numerator: f64, denominator: f64) -> u64 {
    let ratio = numerator / denominator;
    let nearest = ratio.round();
    // float-to-int `as` saturates and maps NaN to 0
    if (ratio - nearest).abs() <= nearest.abs() * SNAP_ULPS * f64::EPSILON {
        nearest as u64
    } else {
        ratio.floor() as u64
    }
}

/// Total declared area per zone type.
pub fn zone_breakdown(zones: &[Zone]) -> BTreeMap<ZoneType, SquareMeters> {
    let mut areas = BTreeMap::new();
    for zone in zones {
        *areas.entry(zone.zone_type).or_insert(0.0) += zone.area();
    }
    areas
}

// ============================================================================
// CALCULATOR
// ============================================================================

/// Capacity calculator bound to a set of defaults.
#[derive(Debug, Clone)]
pub struct CapacityCalculator {
    defaults: CapacityDefaults,
}

impl Default for CapacityCalculator {
    fn default() -> Self {
        Self {
            defaults: CapacityDefaults::default(),
        }
    }
}

impl CapacityCalculator {
    /// Create a new calculator, validating the defaults.
    pub fn new(defaults: CapacityDefaults) -> StowageResult<Self> {
        defaults.validate()?;
        Ok(Self { defaults })
    }

    pub fn defaults(&self) -> &CapacityDefaults {
        &self.defaults
    }

    /// Estimate capacity for every pallet request on the plan.
    ///
    /// Plans without pallet requests are estimated for standard and euro
    /// pallets.
    pub fn calculate(&self, plan: &FloorPlan) -> CapacityReport {
        let clearances = plan.clearances.resolve(&self.defaults.clearances);
        let usable = usable_rectangle(plan, &clearances);
        let storage = storage_area(plan, &usable);
        let clear = clear_height(plan.height, clearances.sprinkler);

        let requests = if plan.pallets.is_empty() {
            vec![
                PalletRequest::new(PalletType::Standard),
                PalletRequest::new(PalletType::Euro),
            ]
        } else {
            plan.pallets.clone()
        };

        let pallets: Vec<PalletCapacity> = requests
            .iter()
            .map(|request| self.estimate(plan, &clearances, storage.area, request))
            .collect();

        tracing::debug!(
            floor_id = ?plan.floor_id,
            usable_area = usable.area,
            storage_area = storage.area,
            storage_source = ?storage.source,
            estimates = pallets.len(),
            "Capacity calculated"
        );

        CapacityReport {
            floor_id: plan.floor_id.clone(),
            usable,
            storage,
            zone_areas: zone_breakdown(&plan.zones),
            clear_height: clear,
            pallets,
        }
    }

    fn estimate(
        &self,
        plan: &FloorPlan,
        clearances: &Clearances,
        area: SquareMeters,
        request: &PalletRequest,
    ) -> PalletCapacity {
        let dimensions = request
            .dimensions
            .or_else(|| self.defaults.pallet(request.pallet_type));

        let Some(dims) = dimensions else {
            tracing::warn!(
                floor_id = ?plan.floor_id,
                pallet_type = %request.pallet_type,
                "Pallet request has no dimensions, estimating zero capacity"
            );
            return PalletCapacity {
                pallet_type: request.pallet_type,
                dimensions: None,
                footprint_area: 0.0,
                positions: 0,
                stack_count: 1,
                max_pallets: 0,
            };
        };

        let footprint_area = dims.footprint();
        let positions = footprint_count(area, footprint_area);
        let levels = stack_count(
            plan.height,
            clearances.sprinkler,
            dims.height,
            request.stacking_override.or(plan.stacking_override),
        );

        PalletCapacity {
            pallet_type: request.pallet_type,
            dimensions: Some(dims),
            footprint_area,
            positions,
            stack_count: levels,
            max_pallets: positions.saturating_mul(u64::from(levels)),
        }
    }
}

/// Estimate capacity with the default pallet dimensions and clearances.
pub fn calculate(plan: &FloorPlan) -> CapacityReport {
    CapacityCalculator::default().calculate(plan)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn example_clearances() -> Clearances {
        Clearances {
            wall: 0.5,
            sprinkler: 0.9,
            safety: 0.0,
        }
    }

    fn example_plan() -> FloorPlan {
        FloorPlan::new(50.0, 30.0, 10.0)
            .with_clearances(example_clearances())
            .with_pallets(vec![PalletRequest::new(PalletType::Standard)])
    }

    #[test]
    fn test_example_floor_usable_rectangle() {
        let usable = usable_rectangle(&example_plan(), &example_clearances());
        assert!((usable.length - 49.0).abs() < 1e-9);
        assert!((usable.width - 29.0).abs() < 1e-9);
        assert!((usable.area - 1421.0).abs() < 1e-9);
    }

    #[test]
    fn test_example_floor_standard_pallets() {
        let report = calculate(&example_plan());
        let standard = report.for_pallet(PalletType::Standard).unwrap();

        assert!((standard.footprint_area - 1.238_707_2).abs() < 1e-9);
        assert_eq!(standard.positions, 1147);
        assert_eq!(standard.stack_count, 6);
        assert_eq!(standard.max_pallets, 6882);
        assert_eq!(report.storage.source, StorageSource::UsableRectangle);
        assert!((report.clear_height - 9.1).abs() < 1e-9);
    }

    #[test]
    fn test_loading_and_dock_reduce_length_only() {
        let plan = example_plan().with_loading_depth(3.0).with_dock_depth(2.0);
        let usable = usable_rectangle(&plan, &example_clearances());
        assert!((usable.length - 44.0).abs() < 1e-9);
        assert!((usable.width - 29.0).abs() < 1e-9);
    }

    #[test]
    fn test_safety_clearance_applies_to_both_sides() {
        let clearances = Clearances {
            wall: 0.5,
            sprinkler: 0.9,
            safety: 1.0,
        };
        let usable = usable_rectangle(&example_plan(), &clearances);
        assert!((usable.length - 47.0).abs() < 1e-9);
        assert!((usable.width - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_clearances_larger_than_floor_yield_zero() {
        let plan = FloorPlan::new(2.0, 2.0, 10.0).with_clearances(Clearances {
            wall: 1.5,
            sprinkler: 0.9,
            safety: 0.0,
        });
        let report = calculate(&plan);
        assert_eq!(report.usable.area, 0.0);
        assert!(report.pallets.iter().all(|p| p.max_pallets == 0));
    }

    #[test]
    fn test_negative_dimensions_yield_zero() {
        let plan = FloorPlan::new(-50.0, 30.0, 10.0);
        let report = calculate(&plan);
        assert_eq!(report.usable.area, 0.0);
        assert!(report.pallets.iter().all(|p| p.positions == 0));
    }

    #[test]
    fn test_declared_storage_zones_replace_rectangle() {
        let plan = example_plan().with_zones(vec![
            Zone::new(ZoneType::Storage, 20.0, 10.0).named("A"),
            Zone::new(ZoneType::Storage, 10.0, 10.0).at(25.0, 0.0).named("B"),
            Zone::new(ZoneType::Office, 5.0, 5.0),
        ]);
        let report = calculate(&plan);

        assert_eq!(report.storage.source, StorageSource::DeclaredZones);
        assert!((report.storage.area - 300.0).abs() < 1e-9);
        assert_eq!(report.zone_areas.get(&ZoneType::Office), Some(&25.0));
        assert_eq!(report.zone_areas.get(&ZoneType::Storage), Some(&300.0));

        let standard = report.for_pallet(PalletType::Standard).unwrap();
        assert_eq!(standard.positions, 242);
    }

    #[test]
    fn test_zones_without_storage_hold_nothing() {
        let plan = example_plan().with_zones(vec![Zone::new(ZoneType::Dock, 10.0, 5.0)]);
        let report = calculate(&plan);
        assert_eq!(report.storage.area, 0.0);
        assert_eq!(report.pallets[0].max_pallets, 0);
    }

    #[test]
    fn test_oversized_zones_are_capped() {
        let plan = example_plan().with_zones(vec![
            Zone::new(ZoneType::Storage, 50.0, 30.0),
            Zone::new(ZoneType::Storage, 50.0, 30.0),
        ]);
        let capped = calculate(&plan);
        let whole = calculate(&example_plan());

        assert_eq!(capped.storage.source, StorageSource::CappedZones);
        assert_eq!(capped.pallets[0].max_pallets, whole.pallets[0].max_pallets);
    }

    #[test]
    fn test_default_pallets_when_none_requested() {
        let plan = FloorPlan::new(50.0, 30.0, 10.0);
        let report = calculate(&plan);
        let types: Vec<PalletType> = report.pallets.iter().map(|p| p.pallet_type).collect();
        assert_eq!(types, vec![PalletType::Standard, PalletType::Euro]);

        let euro = report.for_pallet(PalletType::Euro).unwrap();
        // 1421 / 0.96 = 1480.2
        assert_eq!(euro.positions, 1480);
    }

    #[test]
    fn test_custom_without_dimensions_is_zero() {
        let plan = example_plan().with_pallets(vec![PalletRequest::new(PalletType::Custom)]);
        let report = calculate(&plan);
        let custom = report.for_pallet(PalletType::Custom).unwrap();
        assert_eq!(custom.dimensions, None);
        assert_eq!(custom.positions, 0);
        assert_eq!(custom.stack_count, 1);
        assert_eq!(custom.max_pallets, 0);
    }

    #[test]
    fn test_custom_dimensions() {
        let plan = example_plan().with_pallets(vec![PalletRequest::custom(
            PalletDimensions::new(1.0, 1.0, 2.0),
        )]);
        let report = calculate(&plan);
        let custom = report.for_pallet(PalletType::Custom).unwrap();
        assert_eq!(custom.positions, 1421);
        assert_eq!(custom.stack_count, 4);
        assert_eq!(custom.max_pallets, 5684);
    }

    #[test]
    fn test_request_override_beats_plan_override() {
        let plan = example_plan()
            .with_stacking_override(2)
            .with_pallets(vec![
                PalletRequest::new(PalletType::Standard).with_stacking_override(3),
                PalletRequest::new(PalletType::Euro),
            ]);
        let report = calculate(&plan);
        assert_eq!(report.for_pallet(PalletType::Standard).unwrap().stack_count, 3);
        assert_eq!(report.for_pallet(PalletType::Euro).unwrap().stack_count, 2);
    }

    #[test]
    fn test_stack_count_exact_division() {
        assert_eq!(stack_count(10.0, 1.0, 1.5, None), 6);
        assert_eq!(stack_count(10.0, 0.9, 1.5, None), 6);
    }

    #[test]
    fn test_stack_count_never_below_one() {
        assert_eq!(stack_count(1.0, 0.9, 1.5, None), 1);
        assert_eq!(stack_count(10.0, 0.9, 0.0, None), 1);
        assert_eq!(stack_count(10.0, 0.9, 1.5, Some(0)), 1);
    }

    #[test]
    fn test_footprint_count_guards() {
        assert_eq!(footprint_count(100.0, 0.0), 0);
        assert_eq!(footprint_count(-1.0, 1.0), 0);
        assert_eq!(footprint_count(f64::NAN, 1.0), 0);
        assert_eq!(footprint_count(10.0, 2.5), 4);
    }

    #[test]
    fn test_footprint_count_snaps_only_representation_error() {
        // 0.3 / 0.1 evaluates to 2.9999999999999996
        assert_eq!(footprint_count(0.3, 0.1), 3);
        assert_eq!(footprint_count(2.999_999_999_5, 1.0), 2);
        assert_eq!(footprint_count(2.999_999_999_999, 1.0), 2);
    }

    #[test]
    fn test_partial_plan_clearances_fall_back_to_calculator_defaults() {
        let defaults = CapacityDefaults {
            clearances: Clearances {
                wall: 0.5,
                sprinkler: 2.0,
                safety: 0.0,
            },
            ..CapacityDefaults::default()
        };
        let calculator = CapacityCalculator::new(defaults).unwrap();
        let plan: FloorPlan = serde_json::from_str(
            r#"{"length": 50, "width": 30, "height": 10, "clearances": {"wall": 1.0}}"#,
        )
        .unwrap();

        let report = calculator.calculate(&plan);
        assert!((report.clear_height - 8.0).abs() < 1e-9);
        assert!((report.usable.length - 48.0).abs() < 1e-9);
        assert!((report.usable.width - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_without_clearances_uses_calculator_defaults() {
        let defaults = CapacityDefaults {
            clearances: Clearances {
                wall: 1.0,
                sprinkler: 1.0,
                safety: 0.5,
            },
            ..CapacityDefaults::default()
        };
        let report = CapacityCalculator::new(defaults)
            .unwrap()
            .calculate(&FloorPlan::new(50.0, 30.0, 10.0));
        assert!((report.usable.width - 27.0).abs() < 1e-9);
        assert!((report.clear_height - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculator_rejects_invalid_defaults() {
        let mut defaults = CapacityDefaults::default();
        defaults.standard_pallet.length = f64::NAN;
        assert!(CapacityCalculator::new(defaults).is_err());
    }

    #[test]
    fn test_floor_plan_from_json() {
        let plan: FloorPlan = serde_json::from_str(
            r#"{
                "floor_id": "F1",
                "length": 50, "width": 30, "height": 10,
                "clearances": {"wall": 0.5, "sprinkler": 0.9},
                "pallets": [{"pallet_type": "standard"}]
            }"#,
        )
        .unwrap();
        assert_eq!(plan.floor_id.as_deref(), Some("F1"));
        assert_eq!(plan.clearances.wall, Some(0.5));
        assert_eq!(plan.clearances.sprinkler, Some(0.9));
        assert_eq!(plan.clearances.safety, None);
        assert_eq!(plan.pallets, vec![PalletRequest::new(PalletType::Standard)]);

        let report = calculate(&plan);
        assert_eq!(report.pallets[0].max_pallets, 6882);
    }
}
