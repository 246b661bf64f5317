//! # Caliper Geo
//!
//! Geographic diameter of features on top of `caliper-core`.
//!
//! A feature is reduced to its coordinates, the coordinates to a hull ring with
//! `geo`, and the ring is measured by the rotating-calipers sweep using
//! great-circle distance and bearing.
//!
//! ## Quick Start
//!
//! ```rust
//! use caliper_geo::{GeoDiameter, GeoConfig, HullKind};
//! use geo::{point, MultiPoint};
//!
//! let stations = MultiPoint::new(vec![
//!     point!(x: -0.1278, y: 51.5074), // London
//!     point!(x: 2.3522, y: 48.8566),  // Paris
//!     point!(x: 4.3517, y: 50.8503),  // Brussels
//! ]);
//!
//! let measurer = GeoDiameter::new(GeoConfig::new().with_hull(HullKind::Convex)).unwrap();
//! let km = measurer.diameter(&stations).unwrap();
//! assert!(km > 340.0 && km < 345.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod extract;
pub mod hull;
pub mod measure;
pub mod metric;

// Re-exports
pub use extract::{coordinates_of, from_coord};
pub use hull::{ConcaveHullExtractor, ConvexHullExtractor, HullExtractor, HullKind};
pub use measure::{GeoConfig, GeoDiameter};
pub use metric::{to_point, GreatCircle, LengthUnit};

pub use caliper_core::{
    diameter, exhaustive_diameter, Bearing, BearingFn, Config, Coordinate, Diameter, DiameterEngine,
    DistanceFn, Error, Planar, Result, Ring, Winding,
};
