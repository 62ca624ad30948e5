//! # Line Geometry Engine
//!
//! Reduces raw phase coordinates and bundle layout to the three scalars
//! the parameter formulas consume: GMD (geometric mean distance between
//! phases), bundle GMR, and the bundle equivalent radius R_eq, all in
//! meters.
//!
//! The reductions are plain geometric means (n-th root of product). Any
//! degenerate configuration that would hand a zero or negative value to a
//! geometric mean or, downstream, to a logarithm (coincident phase
//! centers, zero spacing, GMD not exceeding GMR/R_eq) is rejected with
//! `InvalidGeometry` instead of producing a NaN.

use serde::{Deserialize, Serialize};

use crate::catalog::ConductorSpec;
use crate::errors::{CalcError, CalcResult};

/// Horizontal/vertical offset of one phase bundle center (m)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x_m: f64,
    pub y_m: f64,
}

impl Point2D {
    pub fn new(x_m: f64, y_m: f64) -> Self {
        Self { x_m, y_m }
    }

    /// Euclidean distance to another point (m)
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (self.x_m - other.x_m).hypot(self.y_m - other.y_m)
    }
}

/// The three scalars handed to the parameter formulas (all meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    /// Geometric mean distance between phases
    pub gmd_m: f64,
    /// Bundle geometric mean radius
    pub gmr_m: f64,
    /// Bundle equivalent outer radius
    pub r_eq_m: f64,
}

/// Geometric mean: n-th root of the product of the values.
///
/// Computed as exp(mean(ln)) so the product cannot overflow; rejects any
/// non-positive term, which is how coincident points and zero spacings
/// surface.
pub fn gmean(values: &[f64]) -> CalcResult<f64> {
    if values.is_empty() {
        return Err(CalcError::invalid_geometry(
            "geometric mean of an empty set",
        ));
    }
    let mut log_sum = 0.0;
    for &v in values {
        if v <= 0.0 {
            return Err(CalcError::invalid_geometry(format!(
                "non-positive distance {} m in geometric mean (coincident or degenerate geometry)",
                v
            )));
        }
        log_sum += v.ln();
    }
    Ok((log_sum / values.len() as f64).exp())
}

/// Distance multiset seen by one sub-conductor of a regular bundle of
/// `count` sub-conductors at spacing `d`: n-1 terms, all `d` except the
/// diagonal `d*sqrt(2)` of a 4-bundle square.
pub fn bundle_distances(count: u32, spacing_m: f64) -> Vec<f64> {
    let d = spacing_m;
    match count {
        0 | 1 => vec![],
        2 => vec![d],
        3 => vec![d, d],
        _ => vec![d, d, d * std::f64::consts::SQRT_2],
    }
}

/// Solve GMD, GMR, and R_eq for the given circuits.
///
/// `circuits` holds one or two phase triplets (A, B, C); for a double
/// circuit the second triplet is the mirrored set (A', B', C') paired
/// index-wise with the first.
pub fn solve(
    circuits: &[[Point2D; 3]],
    bundle_count: u32,
    spacing_m: f64,
    conductor: &ConductorSpec,
) -> CalcResult<LineGeometry> {
    let (gmd_m, gmr_m, r_eq_m) = match circuits {
        [single] => {
            let gmd = gmd_single(single)?;
            let gmr = bundle_gmr(bundle_count, spacing_m, conductor.gmr().value())?;
            let r_eq = bundle_gmr(bundle_count, spacing_m, conductor.radius().value())?;
            (gmd, gmr, r_eq)
        }
        [first, second] => {
            let gmd = gmd_double(first, second)?;
            let gmr = double_circuit_mean(first, second, conductor.gmr().value())?;
            let own_radius = (-0.25_f64).exp() * conductor.radius().value();
            let r_eq = double_circuit_mean(first, second, own_radius)?;
            (gmd, gmr, r_eq)
        }
        _ => {
            return Err(CalcError::invalid_geometry(format!(
                "expected 1 or 2 circuits, got {}",
                circuits.len()
            )))
        }
    };

    // Guard every logarithm argument downstream: ln(GMD/GMR) and
    // ln(GMD/R_eq) must both be strictly positive.
    if gmd_m <= gmr_m {
        return Err(CalcError::invalid_geometry(format!(
            "GMD {} m does not exceed GMR {} m",
            gmd_m, gmr_m
        )));
    }
    if gmd_m <= r_eq_m {
        return Err(CalcError::invalid_geometry(format!(
            "GMD {} m does not exceed equivalent radius {} m",
            gmd_m, r_eq_m
        )));
    }

    Ok(LineGeometry { gmd_m, gmr_m, r_eq_m })
}

/// Single-circuit GMD: geometric mean of the three pairwise distances
fn gmd_single(phases: &[Point2D; 3]) -> CalcResult<f64> {
    let [a, b, c] = phases;
    gmean(&[a.distance_to(b), a.distance_to(c), b.distance_to(c)])
}

/// Double-circuit GMD: for each phase pair, the geometric mean of the
/// four inter-circuit distances (for A-B: |AB|, |AB'|, |A'B|, |A'B'|),
/// then the geometric mean of the three pair values.
fn gmd_double(first: &[Point2D; 3], second: &[Point2D; 3]) -> CalcResult<f64> {
    let pair_mean = |i: usize, j: usize| -> CalcResult<f64> {
        gmean(&[
            first[i].distance_to(&first[j]),
            first[i].distance_to(&second[j]),
            second[i].distance_to(&first[j]),
            second[i].distance_to(&second[j]),
        ])
    };
    let ab = pair_mean(0, 1)?;
    let ac = pair_mean(0, 2)?;
    let bc = pair_mean(1, 2)?;
    gmean(&[ab, ac, bc])
}

/// Single-circuit bundle reduction: geometric mean of the inter-sub-conductor
/// distance multiset together with the conductor's own term (its GMR for
/// the inductive radius, its outer radius for R_eq).
fn bundle_gmr(count: u32, spacing_m: f64, own_term_m: f64) -> CalcResult<f64> {
    let mut terms = bundle_distances(count, spacing_m);
    terms.push(own_term_m);
    gmean(&terms)
}

/// Double-circuit per-phase reduction: sqrt(own term x |PP'|) for each of
/// the three phase pairs, then the geometric mean of the three.
fn double_circuit_mean(
    first: &[Point2D; 3],
    second: &[Point2D; 3],
    own_term_m: f64,
) -> CalcResult<f64> {
    let mut per_phase = [0.0; 3];
    for i in 0..3 {
        let separation = first[i].distance_to(&second[i]);
        let product = own_term_m * separation;
        if product <= 0.0 {
            return Err(CalcError::invalid_geometry(format!(
                "coincident phase pair at index {} (separation {} m)",
                i, separation
            )));
        }
        per_phase[i] = product.sqrt();
    }
    gmean(&per_phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConductorType;

    fn flat_phases() -> [Point2D; 3] {
        [
            Point2D::new(-3.0, 30.0),
            Point2D::new(0.0, 30.0),
            Point2D::new(3.0, 30.0),
        ]
    }

    #[test]
    fn test_gmean_simple() {
        assert!((gmean(&[2.0, 8.0]).unwrap() - 4.0).abs() < 1e-12);
        assert!((gmean(&[3.0, 3.0, 6.0]).unwrap() - 54.0_f64.cbrt()).abs() < 1e-12);
    }

    #[test]
    fn test_gmean_rejects_zero() {
        assert!(gmean(&[3.0, 0.0]).is_err());
        assert!(gmean(&[]).is_err());
    }

    #[test]
    fn test_gmd_flat_configuration() {
        // Distances 3, 3, 6 -> cbrt(54) = 3.7798 m
        let gmd = gmd_single(&flat_phases()).unwrap();
        assert!((gmd - 3.7798).abs() < 1e-3);
    }

    #[test]
    fn test_gmd_permutation_invariant() {
        let [a, b, c] = flat_phases();
        let reference = gmd_single(&[a, b, c]).unwrap();
        for perm in [[b, a, c], [c, b, a], [b, c, a], [c, a, b], [a, c, b]] {
            assert!((gmd_single(&perm).unwrap() - reference).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gmd_coincident_points_rejected() {
        let phases = [
            Point2D::new(0.0, 30.0),
            Point2D::new(0.0, 30.0),
            Point2D::new(3.0, 30.0),
        ];
        let err = gmd_single(&phases).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_bundle_distances_counts() {
        assert!(bundle_distances(1, 0.4).is_empty());
        assert_eq!(bundle_distances(2, 0.4), vec![0.4]);
        assert_eq!(bundle_distances(3, 0.4), vec![0.4, 0.4]);

        let quad = bundle_distances(4, 0.4);
        assert_eq!(quad.len(), 3);
        let diagonals = quad
            .iter()
            .filter(|&&d| (d - 0.4 * std::f64::consts::SQRT_2).abs() < 1e-12)
            .count();
        assert_eq!(diagonals, 1);
        assert_eq!(quad.iter().filter(|&&d| (d - 0.4).abs() < 1e-12).count(), 2);
    }

    #[test]
    fn test_single_conductor_bundle_is_identity() {
        // n=1: no distance terms contribute, GMR and R_eq are the catalog values
        let hawk = ConductorType::Hawk.spec();
        let geometry = solve(&[flat_phases()], 1, 0.0, &hawk).unwrap();
        assert!((geometry.gmr_m - 8.809e-3).abs() < 1e-12);
        assert!((geometry.r_eq_m - 21.793e-3 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_bundle_gmr() {
        // n=2 at d=0.4: GMR = sqrt(0.4 * own_gmr)
        let hawk = ConductorType::Hawk.spec();
        let geometry = solve(&[flat_phases()], 2, 0.4, &hawk).unwrap();
        let expected = (0.4_f64 * 8.809e-3).sqrt();
        assert!((geometry.gmr_m - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_spacing_with_bundle_rejected() {
        let hawk = ConductorType::Hawk.spec();
        assert!(solve(&[flat_phases()], 2, 0.0, &hawk).is_err());
    }

    #[test]
    fn test_double_circuit_gmd() {
        // Mirrored vertical circuits 10 m apart
        let first = [
            Point2D::new(-5.0, 30.0),
            Point2D::new(-5.0, 34.0),
            Point2D::new(-5.0, 38.0),
        ];
        let second = [
            Point2D::new(5.0, 30.0),
            Point2D::new(5.0, 34.0),
            Point2D::new(5.0, 38.0),
        ];
        let gmd = gmd_double(&first, &second).unwrap();

        // A-B pair: |AB|=4, |AB'|=sqrt(116), |A'B|=sqrt(116), |A'B'|=4
        let ab = gmean(&[4.0, 116.0_f64.sqrt(), 116.0_f64.sqrt(), 4.0]).unwrap();
        let ac = gmean(&[8.0, 164.0_f64.sqrt(), 164.0_f64.sqrt(), 8.0]).unwrap();
        let bc = ab;
        let expected = gmean(&[ab, ac, bc]).unwrap();
        assert!((gmd - expected).abs() < 1e-12);
    }

    #[test]
    fn test_double_circuit_gmr_pairing() {
        let first = [
            Point2D::new(-5.0, 30.0),
            Point2D::new(-5.0, 34.0),
            Point2D::new(-5.0, 38.0),
        ];
        let second = [
            Point2D::new(5.0, 30.0),
            Point2D::new(5.0, 34.0),
            Point2D::new(5.0, 38.0),
        ];
        let drake = ConductorType::Drake.spec();
        let geometry = solve(&[first, second], 1, 0.0, &drake).unwrap();

        // Every |PP'| = 10, so every per-phase value and their mean equal
        // sqrt(own_gmr * 10)
        let expected_gmr = (11.369e-3_f64 * 10.0).sqrt();
        assert!((geometry.gmr_m - expected_gmr).abs() < 1e-12);

        // R_eq folds e^(-1/4) into the own-radius term
        let expected_r_eq = ((-0.25_f64).exp() * 28.143e-3 / 2.0 * 10.0).sqrt();
        assert!((geometry.r_eq_m - expected_r_eq).abs() < 1e-12);
    }

    #[test]
    fn test_gmd_must_exceed_radii() {
        // Phases packed tighter than the bundle radius they produce
        let phases = [
            Point2D::new(0.0, 30.0),
            Point2D::new(0.005, 30.0),
            Point2D::new(0.01, 30.0),
        ];
        let hawk = ConductorType::Hawk.spec();
        let err = solve(&[phases], 1, 0.0, &hawk).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }
}
