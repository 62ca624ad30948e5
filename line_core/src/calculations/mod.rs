//! # Line Calculations
//!
//! Each calculation follows one pattern:
//!
//! - a request type (JSON-serializable) with an ordered `validate`
//! - a result type (JSON-serializable)
//! - `calculate(request) -> Result<result, CalcError>` - a pure function
//!
//! ## Available Calculations
//!
//! - [`line`] - per-length and total R/L/C/capacity of an overhead line

pub mod line;

pub use line::{calculate, BundleConfig, CircuitLayout, LineParameters, LineRequest};
