//! # Equipment Catalog
//!
//! Closed, compile-time lookup tables for conductor and tower
//! specifications. Both lookups are pure and total over their identifier
//! sets; unknown string identifiers fail with the matching structured
//! error at the string -> enum boundary.
//!
//! ## Example
//!
//! ```rust
//! use line_core::catalog::{ConductorType, TowerType};
//!
//! let hawk = ConductorType::from_str_flexible("Hawk").unwrap().spec();
//! assert_eq!(hawk.r_ohm_per_km, 0.132);
//!
//! let tower = TowerType::from_str_flexible("Type-1").unwrap().spec();
//! assert_eq!(tower.voltage_v, 66_000.0);
//! ```

pub mod conductors;
pub mod towers;

pub use conductors::{ConductorSpec, ConductorType};
pub use towers::{HorizontalEnvelope, TowerSpec, TowerType};
