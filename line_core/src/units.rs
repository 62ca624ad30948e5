//! # Unit Types
//!
//! Type-safe wrappers for the engine's SI units. Simple newtype wrappers
//! rather than a full units library: the calculation uses a small, fixed
//! set of units, JSON serialization stays clean (just numbers), and there
//! is no runtime overhead.
//!
//! Catalog data is stored in millimeters (conductor handbooks quote mm);
//! all geometry runs in meters; line length is entered in kilometers. The
//! conversions live here so the mm -> m and km -> m factors appear in
//! exactly one place.
//!
//! ## Example
//!
//! ```rust
//! use line_core::units::{Kilometers, Meters, Millimeters};
//!
//! let gmr = Millimeters(8.809);
//! let gmr_m: Meters = gmr.into();
//! assert!((gmr_m.0 - 0.008809).abs() < 1e-12);
//!
//! let length = Kilometers(100.0);
//! let length_m: Meters = length.into();
//! assert_eq!(length_m.0, 100_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Kilometers> for Meters {
    fn from(km: Kilometers) -> Self {
        Meters(km.0 * 1000.0)
    }
}

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / 1000.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Kilometers);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let mm = Millimeters(21.793);
        let m: Meters = mm.into();
        assert!((m.0 - 0.021793).abs() < 1e-12);
    }

    #[test]
    fn test_km_to_m() {
        let km = Kilometers(1.5);
        let m: Meters = km.into();
        assert_eq!(m.0, 1500.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(30.0);
        let b = Meters(23.0);
        assert_eq!((a - b).0, 7.0);
        assert_eq!((a * 2.0).0, 60.0);
        assert_eq!((a / 2.0).0, 15.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(3.78);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "3.78");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
