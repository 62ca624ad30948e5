//! # Line Parameter Calculation
//!
//! Computes the lumped per-unit-length electrical parameters of an
//! overhead transmission line, referred to its full length: series
//! resistance, series inductance, shunt capacitance, and thermal transfer
//! capacity.
//!
//! The pipeline is validate -> geometry -> parameters: a [`LineRequest`]
//! is checked against the catalog and the tower's geometric envelope,
//! reduced to GMD/GMR/R_eq by the geometry engine, and fed through the
//! standard lumped-line formulas. Exactly one of [`LineParameters`] or a
//! structured error comes back.
//!
//! ## Example
//!
//! ```rust
//! use line_core::calculations::line::{calculate, BundleConfig, CircuitLayout, LineRequest};
//! use line_core::geometry::Point2D;
//!
//! let request = LineRequest {
//!     tower: "Type-1".to_string(),
//!     circuits: 1,
//!     layout: CircuitLayout::single([
//!         Point2D::new(-3.0, 30.0),
//!         Point2D::new(0.0, 30.0),
//!         Point2D::new(3.0, 30.0),
//!     ]),
//!     bundle: BundleConfig {
//!         conductor: "Hawk".to_string(),
//!         count: 1,
//!         spacing_m: 0.0,
//!     },
//!     length_km: 100.0,
//! };
//!
//! let result = calculate(&request).unwrap();
//! assert!((result.resistance_ohm - 13.2).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{ConductorSpec, ConductorType, TowerSpec, TowerType};
use crate::errors::{Axis, CalcError, CalcResult};
use crate::geometry::{self, LineGeometry, Point2D};

/// Vacuum permittivity (F/m)
const EPSILON_0: f64 = 8.85419e-12;

/// mu_0 / 2pi, the coefficient of the per-meter inductance formula (H/m)
const INDUCTANCE_COEFF: f64 = 2.0e-7;

/// Phase bundle centers, three per circuit (A, B, C in order).
///
/// For a double circuit the second triplet is the mirrored set
/// (A', B', C'), paired index-wise with the first in the GMD/GMR
/// reductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitLayout {
    circuits: Vec<[Point2D; 3]>,
}

impl CircuitLayout {
    /// Layout for a single circuit
    pub fn single(phases: [Point2D; 3]) -> Self {
        Self {
            circuits: vec![phases],
        }
    }

    /// Layout for a double circuit (second triplet is the mirrored set)
    pub fn double(first: [Point2D; 3], second: [Point2D; 3]) -> Self {
        Self {
            circuits: vec![first, second],
        }
    }

    /// Build from a flat point list (3 or 6 points, circuit by circuit)
    pub fn from_points(points: &[Point2D]) -> CalcResult<Self> {
        match points {
            [a, b, c] => Ok(Self::single([*a, *b, *c])),
            [a, b, c, a2, b2, c2] => Ok(Self::double([*a, *b, *c], [*a2, *b2, *c2])),
            _ => Err(CalcError::LayoutMismatch {
                expected: if points.len() < 5 { 3 } else { 6 },
                actual: points.len(),
            }),
        }
    }

    /// Phase triplets, one per circuit
    pub fn circuits(&self) -> &[[Point2D; 3]] {
        &self.circuits
    }

    /// Total phase point count (3 or 6 for a well-formed layout)
    pub fn point_count(&self) -> usize {
        self.circuits.len() * 3
    }
}

/// Phase bundle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Conductor catalog identifier (e.g. "Hawk", "Drake")
    pub conductor: String,
    /// Sub-conductors per phase bundle (1-4, capped by the tower)
    pub count: u32,
    /// Spacing between adjacent sub-conductors (m); unused for count 1
    pub spacing_m: f64,
}

/// One complete calculation request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tower": "Type-1",
///   "circuits": 1,
///   "layout": [[
///     { "x_m": -3.0, "y_m": 30.0 },
///     { "x_m": 0.0, "y_m": 30.0 },
///     { "x_m": 3.0, "y_m": 30.0 }
///   ]],
///   "bundle": { "conductor": "Hawk", "count": 1, "spacing_m": 0.0 },
///   "length_km": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRequest {
    /// Tower family identifier (e.g. "Type-1")
    pub tower: String,
    /// Number of three-phase circuits on the tower (1 or 2)
    pub circuits: u32,
    /// Phase bundle centers
    pub layout: CircuitLayout,
    /// Phase bundle configuration
    pub bundle: BundleConfig,
    /// Line length (km)
    pub length_km: f64,
}

impl LineRequest {
    /// Validate the request against the catalog and the tower's geometric
    /// envelope.
    ///
    /// Checks run in a fixed order and short-circuit on the first failure,
    /// so error precedence is reproducible: tower, circuit count, bundle
    /// size, conductor, point count, envelope. Returns the resolved
    /// catalog specs so later stages never re-look-up.
    pub fn validate(&self) -> CalcResult<(TowerSpec, ConductorSpec)> {
        let tower = TowerType::from_str_flexible(&self.tower)?.spec();

        if self.circuits != 1 && self.circuits != 2 {
            return Err(CalcError::InvalidCircuitCount {
                count: self.circuits,
            });
        }

        if self.bundle.count == 0 || self.bundle.count > tower.max_bundle {
            return Err(CalcError::BundleTooLarge {
                count: self.bundle.count,
                max: tower.max_bundle,
                tower: tower.tower.display_name().to_string(),
            });
        }

        let conductor = ConductorType::from_str_flexible(&self.bundle.conductor)?.spec();

        let expected_points = 3 * self.circuits as usize;
        if self.layout.point_count() != expected_points {
            return Err(CalcError::LayoutMismatch {
                expected: expected_points,
                actual: self.layout.point_count(),
            });
        }

        self.check_envelope(&tower)?;

        Ok((tower, conductor))
    }

    /// Envelope check: every phase's vertical offset within the tower's
    /// height band, every horizontal offset within its |x| band (which for
    /// Type-2 differs between side and center phases). Bounds inclusive.
    fn check_envelope(&self, tower: &TowerSpec) -> CalcResult<()> {
        for (circuit_idx, phases) in self.layout.circuits().iter().enumerate() {
            for (phase_idx, point) in phases.iter().enumerate() {
                let label = format!("phase {}, circuit {}", phase_idx + 1, circuit_idx + 1);

                if point.y_m < tower.min_height_m || point.y_m > tower.max_height_m {
                    return Err(CalcError::out_of_envelope(
                        label,
                        Axis::Vertical,
                        point.y_m,
                        tower.min_height_m,
                        tower.max_height_m,
                    ));
                }

                let (min_abs, max_abs) = tower.horizontal.bounds_for_phase(phase_idx);
                let abs_x = point.x_m.abs();
                if abs_x < min_abs || abs_x > max_abs {
                    return Err(CalcError::out_of_envelope(
                        label,
                        Axis::Horizontal,
                        point.x_m,
                        min_abs,
                        max_abs,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Computed line parameters, referred to the full line length.
///
/// ## JSON Example
///
/// ```json
/// {
///   "resistance_ohm": 13.2,
///   "inductance_mh": 121.5,
///   "capacitance_uf": 0.858,
///   "capacity_mva": 75.34
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineParameters {
    /// Series resistance (ohm)
    pub resistance_ohm: f64,
    /// Series inductance (mH)
    pub inductance_mh: f64,
    /// Shunt capacitance (uF)
    pub capacitance_uf: f64,
    /// Thermal transfer capacity (MVA)
    pub capacity_mva: f64,
}

/// Series resistance of the whole line: the bundle parallels its
/// sub-conductors, dividing the per-conductor resistance by the count.
fn resistance_ohm(conductor: &ConductorSpec, length_km: f64, bundle_count: u32) -> f64 {
    conductor.r_ohm_per_km * length_km / bundle_count as f64
}

/// Series inductance in mH: 2e-7 * ln(GMD/GMR) H/m over the full length
fn inductance_mh(geometry: &LineGeometry, length_km: f64) -> f64 {
    let henries_per_m = INDUCTANCE_COEFF * (geometry.gmd_m / geometry.gmr_m).ln();
    henries_per_m * length_km * 1000.0 * 1000.0
}

/// Shunt capacitance in uF: 2*pi*eps0 / ln(GMD/R_eq) F/m over the full length
fn capacitance_uf(geometry: &LineGeometry, length_km: f64) -> f64 {
    let farads_per_m =
        2.0 * std::f64::consts::PI * EPSILON_0 / (geometry.gmd_m / geometry.r_eq_m).ln();
    farads_per_m * length_km * 1000.0 * 1e6
}

/// Thermal transfer capacity in MVA: bundled ampacity times the line
/// voltage (doubled for a double circuit) times sqrt(3).
fn capacity_mva(
    tower: &TowerSpec,
    conductor: &ConductorSpec,
    bundle_count: u32,
    circuits: u32,
) -> f64 {
    let voltage_v = if circuits == 2 {
        2.0 * tower.voltage_v
    } else {
        tower.voltage_v
    };
    let current_a = conductor.ampacity_a * bundle_count as f64;
    current_a * voltage_v * 3.0_f64.sqrt() / 1000.0
}

/// Run a complete line parameter calculation.
///
/// Pure function of the request: validates, reduces the geometry, applies
/// the parameter formulas, and returns exactly one of a fully-populated
/// [`LineParameters`] or the first [`CalcError`] encountered.
pub fn calculate(request: &LineRequest) -> CalcResult<LineParameters> {
    let (tower, conductor) = request.validate()?;

    let geometry = geometry::solve(
        request.layout.circuits(),
        request.bundle.count,
        request.bundle.spacing_m,
        &conductor,
    )?;

    Ok(LineParameters {
        resistance_ohm: resistance_ohm(&conductor, request.length_km, request.bundle.count),
        inductance_mh: inductance_mh(&geometry, request.length_km),
        capacitance_uf: capacitance_uf(&geometry, request.length_km),
        capacity_mva: capacity_mva(&tower, &conductor, request.bundle.count, request.circuits),
    })
}
