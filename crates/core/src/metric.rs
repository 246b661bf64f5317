//! Distance and bearing collaborators.
//!
//! The sweep never computes geometry itself: it asks a [`DistanceFn`] how far
//! apart two vertices are and a [`BearingFn`] which way an edge points. Both are
//! implemented for plain closures, so a caller can pass two independent
//! functions, or a single type such as [`Planar`] that implements both.

use crate::coord::Coordinate;

/// Distance between two coordinates, in the metric's own unit.
pub trait DistanceFn {
    /// Returns the non-negative distance from `p` to `q`.
    fn distance(&self, p: Coordinate, q: Coordinate) -> f64;
}

/// Initial compass bearing between two coordinates.
pub trait BearingFn {
    /// Returns the bearing from `p` towards `q` in degrees, clockwise from
    /// north, in `(-180, 180]`.
    fn bearing(&self, p: Coordinate, q: Coordinate) -> f64;

    /// Rotation of the north reference between `p` and `q`, in degrees.
    ///
    /// A direction with bearing `b` at `p`, carried along the path to `q`,
    /// has bearing `b + convergence(p, q)` at `q`. Zero wherever north points
    /// the same way everywhere, which is the default.
    #[inline]
    fn convergence(&self, _p: Coordinate, _q: Coordinate) -> f64 {
        0.0
    }
}

impl<F> DistanceFn for F
where
    F: Fn(Coordinate, Coordinate) -> f64,
{
    #[inline]
    fn distance(&self, p: Coordinate, q: Coordinate) -> f64 {
        self(p, q)
    }
}

/// Wraps a closure so it can be passed where a [`BearingFn`] is expected.
///
/// Closures have the same signature for both roles, so only one of the two
/// traits gets the blanket impl.
#[derive(Debug, Clone, Copy)]
pub struct Bearing<F>(pub F);

impl<F> BearingFn for Bearing<F>
where
    F: Fn(Coordinate, Coordinate) -> f64,
{
    #[inline]
    fn bearing(&self, p: Coordinate, q: Coordinate) -> f64 {
        (self.0)(p, q)
    }
}

/// Euclidean metric on the `(x, y)` plane.
///
/// Bearings follow the compass convention: `+y` is north (0°) and `+x` is
/// east (90°).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Planar;

impl DistanceFn for Planar {
    #[inline]
    fn distance(&self, p: Coordinate, q: Coordinate) -> f64 {
        (q.lon - p.lon).hypot(q.lat - p.lat)
    }
}

impl BearingFn for Planar {
    #[inline]
    fn bearing(&self, p: Coordinate, q: Coordinate) -> f64 {
        let deg = (q.lon - p.lon).atan2(q.lat - p.lat).to_degrees();
        if deg <= -180.0 {
            deg + 360.0
        } else {
            deg
        }
    }
}
