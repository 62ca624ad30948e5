//! Conductor Catalog (ACSR)
//!
//! Physical and electrical specifications for the supported ACSR conductor
//! codes. Values are fixed handbook constants: outer diameter and GMR in
//! millimeters, AC resistance in ohms per kilometer, thermal current rating
//! in amperes.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Supported ACSR conductor codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductorType {
    Hawk,
    Drake,
    Cardinal,
    Rail,
    Pheasant,
}

impl ConductorType {
    /// All conductor variants for UI selection
    pub const ALL: [ConductorType; 5] = [
        ConductorType::Hawk,
        ConductorType::Drake,
        ConductorType::Cardinal,
        ConductorType::Rail,
        ConductorType::Pheasant,
    ];

    /// Parse from a catalog name, case-insensitively
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "HAWK" => Ok(ConductorType::Hawk),
            "DRAKE" => Ok(ConductorType::Drake),
            "CARDINAL" => Ok(ConductorType::Cardinal),
            "RAIL" => Ok(ConductorType::Rail),
            "PHEASANT" => Ok(ConductorType::Pheasant),
            _ => Err(CalcError::unknown_conductor(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorType::Hawk => "Hawk",
            ConductorType::Drake => "Drake",
            ConductorType::Cardinal => "Cardinal",
            ConductorType::Rail => "Rail",
            ConductorType::Pheasant => "Pheasant",
        }
    }

    /// Look up the fixed physical specification for this conductor
    pub fn spec(&self) -> ConductorSpec {
        match self {
            ConductorType::Hawk => ConductorSpec {
                conductor: ConductorType::Hawk,
                diameter_mm: 21.793,
                gmr_mm: 8.809,
                r_ohm_per_km: 0.132,
                ampacity_a: 659.0,
            },
            ConductorType::Drake => ConductorSpec {
                conductor: ConductorType::Drake,
                diameter_mm: 28.143,
                gmr_mm: 11.369,
                r_ohm_per_km: 0.080,
                ampacity_a: 907.0,
            },
            ConductorType::Cardinal => ConductorSpec {
                conductor: ConductorType::Cardinal,
                diameter_mm: 30.378,
                gmr_mm: 12.253,
                r_ohm_per_km: 0.067,
                ampacity_a: 996.0,
            },
            ConductorType::Rail => ConductorSpec {
                conductor: ConductorType::Rail,
                diameter_mm: 29.591,
                gmr_mm: 11.765,
                r_ohm_per_km: 0.068,
                ampacity_a: 993.0,
            },
            ConductorType::Pheasant => ConductorSpec {
                conductor: ConductorType::Pheasant,
                diameter_mm: 35.103,
                gmr_mm: 14.204,
                r_ohm_per_km: 0.051,
                ampacity_a: 1187.0,
            },
        }
    }
}

impl std::fmt::Display for ConductorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fixed physical specification of a catalog conductor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorSpec {
    /// Catalog code
    pub conductor: ConductorType,
    /// Outer diameter (mm)
    pub diameter_mm: f64,
    /// Geometric mean radius (mm)
    pub gmr_mm: f64,
    /// AC resistance per unit length (ohm/km)
    pub r_ohm_per_km: f64,
    /// Thermal current rating (A)
    pub ampacity_a: f64,
}

impl ConductorSpec {
    /// Own geometric mean radius in meters
    pub fn gmr(&self) -> Meters {
        Millimeters(self.gmr_mm).into()
    }

    /// Own outer radius in meters (half the catalog diameter)
    pub fn radius(&self) -> Meters {
        Meters::from(Millimeters(self.diameter_mm)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conductor_parsing() {
        assert_eq!(
            ConductorType::from_str_flexible("Hawk").unwrap(),
            ConductorType::Hawk
        );
        assert_eq!(
            ConductorType::from_str_flexible("  drake ").unwrap(),
            ConductorType::Drake
        );
        assert!(ConductorType::from_str_flexible("Falcon").is_err());
    }

    #[test]
    fn test_spec_lookup() {
        let hawk = ConductorType::Hawk.spec();
        assert_eq!(hawk.gmr_mm, 8.809);
        assert_eq!(hawk.r_ohm_per_km, 0.132);
        assert_eq!(hawk.ampacity_a, 659.0);
    }

    #[test]
    fn test_metric_accessors() {
        let hawk = ConductorType::Hawk.spec();
        assert!((hawk.gmr().value() - 8.809e-3).abs() < 1e-12);
        assert!((hawk.radius().value() - 21.793e-3 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let spec = ConductorType::Pheasant.spec();
        let json = serde_json::to_string(&spec).unwrap();
        let roundtrip: ConductorSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }
}
