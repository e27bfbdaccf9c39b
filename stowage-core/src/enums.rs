//! Enum types for STOWAGE inputs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// PALLETS
// ============================================================================

/// Pallet standard used for a capacity estimate or a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalletType {
    /// North American GMA pallet, 48" x 40"
    Standard,
    /// EUR-pallet, 1200mm x 800mm
    Euro,
    /// Customer-supplied dimensions
    Custom,
}

impl PalletType {
    pub const ALL: [PalletType; 3] = [PalletType::Standard, PalletType::Euro, PalletType::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            PalletType::Standard => "standard",
            PalletType::Euro => "euro",
            PalletType::Custom => "custom",
        }
    }
}

impl fmt::Display for PalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PalletType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "standard" | "gma" | "us" => Ok(PalletType::Standard),
            "euro" | "eur" | "epal" => Ok(PalletType::Euro),
            "custom" => Ok(PalletType::Custom),
            _ => Err(ParseEnumError::new("pallet type", s)),
        }
    }
}

// ============================================================================
// ZONES
// ============================================================================

/// Purpose of a declared rectangular zone on a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    Storage,
    Loading,
    Dock,
    Office,
    Aisle,
    Staging,
}

impl ZoneType {
    /// Only storage zones hold pallets.
    pub fn holds_pallets(&self) -> bool {
        matches!(self, ZoneType::Storage)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Storage => "storage",
            ZoneType::Loading => "loading",
            ZoneType::Dock => "dock",
            ZoneType::Office => "office",
            ZoneType::Aisle => "aisle",
            ZoneType::Staging => "staging",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ZoneType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "storage" => Ok(ZoneType::Storage),
            "loading" => Ok(ZoneType::Loading),
            "dock" | "loadingdock" => Ok(ZoneType::Dock),
            "office" => Ok(ZoneType::Office),
            "aisle" => Ok(ZoneType::Aisle),
            "staging" => Ok(ZoneType::Staging),
            _ => Err(ParseEnumError::new("zone type", s)),
        }
    }
}

// ============================================================================
// CUSTOMERS
// ============================================================================

/// Customer membership classification, each carrying its own discount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 5] = [
        MembershipTier::None,
        MembershipTier::Bronze,
        MembershipTier::Silver,
        MembershipTier::Gold,
        MembershipTier::Platinum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::None => "none",
            MembershipTier::Bronze => "bronze",
            MembershipTier::Silver => "silver",
            MembershipTier::Gold => "gold",
            MembershipTier::Platinum => "platinum",
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "" | "none" | "standard" => Ok(MembershipTier::None),
            "bronze" => Ok(MembershipTier::Bronze),
            "silver" => Ok(MembershipTier::Silver),
            "gold" => Ok(MembershipTier::Gold),
            "platinum" => Ok(MembershipTier::Platinum),
            _ => Err(ParseEnumError::new("membership tier", s)),
        }
    }
}

/// Unit a booking is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingUnit {
    /// Pallet positions
    Pallet,
    /// Floor area in square feet
    SquareFoot,
}

impl fmt::Display for BookingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingUnit::Pallet => write!(f, "pallet"),
            BookingUnit::SquareFoot => write!(f, "sq ft"),
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Error when parsing an enum from a free-form string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
