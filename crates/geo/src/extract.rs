//! Coordinate extraction from `geo` geometries.

use caliper_core::Coordinate;
use geo::{Coord, CoordsIter};

/// Converts a `geo` coordinate.
#[inline]
pub fn from_coord(c: Coord<f64>) -> Coordinate {
    Coordinate::new(c.x, c.y)
}

/// Collects every coordinate of a geometry, holes and members included.
///
/// Closing vertices of polygon rings appear twice; hull extraction does not
/// care about repeats.
pub fn coordinates_of<G>(geometry: &G) -> Vec<Coordinate>
where
    G: CoordsIter<Scalar = f64>,
{
    geometry.coords_iter().map(from_coord).collect()
}
