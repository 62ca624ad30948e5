//! Tower Catalog
//!
//! Specifications for the supported tower families: nominal line-to-line
//! voltage, maximum bundle size, and the geometric envelope that phase
//! coordinates must stay inside. Type-2 towers distinguish side phases
//! from the center phase in their horizontal envelope; the other families
//! apply one symmetric band to every phase.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported tower families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerType {
    #[serde(rename = "Type-1")]
    Type1,
    #[serde(rename = "Type-2")]
    Type2,
    #[serde(rename = "Type-3")]
    Type3,
}

impl TowerType {
    /// All tower variants for UI selection
    pub const ALL: [TowerType; 3] = [TowerType::Type1, TowerType::Type2, TowerType::Type3];

    /// Parse from a family name, tolerating case and separator variants
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_'], "-").as_str() {
            "TYPE-1" | "TYPE1" | "1" => Ok(TowerType::Type1),
            "TYPE-2" | "TYPE2" | "2" => Ok(TowerType::Type2),
            "TYPE-3" | "TYPE3" | "3" => Ok(TowerType::Type3),
            _ => Err(CalcError::unknown_tower(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TowerType::Type1 => "Type-1",
            TowerType::Type2 => "Type-2",
            TowerType::Type3 => "Type-3",
        }
    }

    /// Look up the fixed specification for this tower family
    pub fn spec(&self) -> TowerSpec {
        match self {
            TowerType::Type1 => TowerSpec {
                tower: TowerType::Type1,
                voltage_v: 66_000.0,
                max_bundle: 3,
                min_height_m: 23.0,
                max_height_m: 39.0,
                horizontal: HorizontalEnvelope::Symmetric {
                    min_abs_m: 2.2,
                    max_abs_m: 4.0,
                },
            },
            TowerType::Type2 => TowerSpec {
                tower: TowerType::Type2,
                voltage_v: 400_000.0,
                max_bundle: 4,
                min_height_m: 38.25,
                max_height_m: 43.0,
                horizontal: HorizontalEnvelope::SideCenter {
                    side_min_m: 9.4,
                    side_max_m: 11.5,
                    center_max_m: 8.9,
                },
            },
            TowerType::Type3 => TowerSpec {
                tower: TowerType::Type3,
                voltage_v: 154_000.0,
                max_bundle: 3,
                min_height_m: 36.0,
                max_height_m: 48.8,
                horizontal: HorizontalEnvelope::Symmetric {
                    min_abs_m: 1.8,
                    max_abs_m: 5.35,
                },
            },
        }
    }
}

impl std::fmt::Display for TowerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Horizontal phase-spacing envelope, as a band on |x|.
///
/// The minimum clearance binds the outer phases only; the center phase of
/// a flat arrangement may sit on the pole axis (x = 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum HorizontalEnvelope {
    /// One band for the outer phases, center bounded above by the same maximum
    Symmetric { min_abs_m: f64, max_abs_m: f64 },
    /// Outer phases use the side band, the middle phase a separate center bound
    SideCenter {
        side_min_m: f64,
        side_max_m: f64,
        center_max_m: f64,
    },
}

impl HorizontalEnvelope {
    /// Permitted |x| band for the phase at `index` within its circuit (0..3)
    pub fn bounds_for_phase(&self, index: usize) -> (f64, f64) {
        match *self {
            HorizontalEnvelope::Symmetric { min_abs_m, max_abs_m } => {
                if index == 1 {
                    (0.0, max_abs_m)
                } else {
                    (min_abs_m, max_abs_m)
                }
            }
            HorizontalEnvelope::SideCenter {
                side_min_m,
                side_max_m,
                center_max_m,
            } => {
                if index == 1 {
                    (0.0, center_max_m)
                } else {
                    (side_min_m, side_max_m)
                }
            }
        }
    }
}

/// Fixed specification of a tower family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerSpec {
    /// Family identifier
    pub tower: TowerType,
    /// Nominal line-to-line voltage (V)
    pub voltage_v: f64,
    /// Maximum sub-conductors per phase bundle
    pub max_bundle: u32,
    /// Minimum pole height for phase attachment (m)
    pub min_height_m: f64,
    /// Maximum pole height for phase attachment (m)
    pub max_height_m: f64,
    /// Permitted horizontal phase spacing
    pub horizontal: HorizontalEnvelope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tower_parsing() {
        assert_eq!(TowerType::from_str_flexible("Type-1").unwrap(), TowerType::Type1);
        assert_eq!(TowerType::from_str_flexible("type 2").unwrap(), TowerType::Type2);
        assert_eq!(TowerType::from_str_flexible("TYPE_3").unwrap(), TowerType::Type3);
        assert!(TowerType::from_str_flexible("Type-9").is_err());
    }

    #[test]
    fn test_spec_lookup() {
        let spec = TowerType::Type1.spec();
        assert_eq!(spec.voltage_v, 66_000.0);
        assert_eq!(spec.max_bundle, 3);
        assert_eq!(spec.min_height_m, 23.0);
        assert_eq!(spec.max_height_m, 39.0);
    }

    #[test]
    fn test_symmetric_bounds() {
        let spec = TowerType::Type1.spec();
        assert_eq!(spec.horizontal.bounds_for_phase(0), (2.2, 4.0));
        // Center phase has no minimum clearance, it sits on the pole axis
        assert_eq!(spec.horizontal.bounds_for_phase(1), (0.0, 4.0));
        assert_eq!(spec.horizontal.bounds_for_phase(2), (2.2, 4.0));
    }

    #[test]
    fn test_side_center_bounds() {
        let spec = TowerType::Type2.spec();
        assert_eq!(spec.horizontal.bounds_for_phase(0), (9.4, 11.5));
        assert_eq!(spec.horizontal.bounds_for_phase(1), (0.0, 8.9));
        assert_eq!(spec.horizontal.bounds_for_phase(2), (9.4, 11.5));
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&TowerType::Type2).unwrap();
        assert_eq!(json, "\"Type-2\"");
        let roundtrip: TowerType = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, TowerType::Type2);
    }
}
