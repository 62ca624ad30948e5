//! # line_core - Transmission Line Parameter Engine
//!
//! `line_core` computes the electrical parameters of an overhead
//! transmission line - series resistance, series inductance, shunt
//! capacitance, and thermal transfer capacity - from its physical
//! geometry (tower family, phase coordinates, bundle layout) and
//! conductor catalog data.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function per calculation, request in, result out
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: a closed set of structured error variants, not strings
//! - **Validated**: catalog and envelope checks run before any arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use line_core::{calculate, BundleConfig, CircuitLayout, LineRequest};
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
//! let parameters = calculate(&request).unwrap();
//! println!("R = {:.3} ohm", parameters.resistance_ohm);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the line parameter calculation (request, result, pipeline)
//! - [`catalog`] - conductor and tower specification tables
//! - [`geometry`] - GMD/GMR/R_eq reductions from phase coordinates
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod geometry;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BundleConfig, CircuitLayout, LineParameters, LineRequest};
pub use catalog::{ConductorSpec, ConductorType, TowerSpec, TowerType};
pub use errors::{Axis, CalcError, CalcResult};
pub use geometry::{LineGeometry, Point2D};
