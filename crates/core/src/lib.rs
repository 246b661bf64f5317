//! # Caliper Core
//!
//! Polygon diameter by rotating calipers.
//!
//! The diameter of a point set is the largest distance between any two of its
//! points, and it is always realised by two vertices of the set's hull. Given
//! the hull as an ordered ring, the rotating-calipers sweep finds that pair in
//! linear time instead of comparing every pair.
//!
//! ## Core Components
//!
//! - **Ring model**: [`Coordinate`], [`Ring`] with wraparound indexing and
//!   winding canonicalization
//! - **Angles**: [`angle::angle_between`], the counter-clockwise turn between two edges
//! - **Sweep**: [`DiameterEngine`], [`CaliperPair`], [`Diameter`]
//! - **Collaborators**: [`DistanceFn`], [`BearingFn`], and the [`Planar`] metric
//! - **Reference**: [`exhaustive_diameter`], the all-pairs `O(n²)` diameter
//!
//! Hull construction and geographic metrics live in `caliper-geo`.
//!
//! ## Quick Start
//!
//! ```rust
//! use caliper_core::{diameter, Coordinate, Planar};
//!
//! let hull = vec![
//!     Coordinate::new(0.0, 0.0),
//!     Coordinate::new(4.0, 0.0),
//!     Coordinate::new(4.0, 3.0),
//!     Coordinate::new(0.0, 3.0),
//! ];
//!
//! let d = diameter(&hull, &Planar, &Planar).unwrap();
//! assert!((d - 5.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod angle;
pub mod calipers;
pub mod config;
pub mod coord;
pub mod error;
pub mod metric;
pub mod ring;
pub mod robust;

// Re-exports
pub use calipers::{diameter, exhaustive_diameter, CaliperPair, Diameter, DiameterEngine};
pub use config::{Config, Winding, DEFAULT_ANGLE_TOLERANCE};
pub use coord::Coordinate;
pub use error::{Error, Result};
pub use metric::{Bearing, BearingFn, DistanceFn, Planar};
pub use ring::Ring;
