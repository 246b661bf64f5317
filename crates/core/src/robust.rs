//! Robust geometric predicates for ring orientation.
//!
//! Winding detection and convexity checks run on nearly degenerate hulls
//! (thin slivers, almost collinear coastline runs), where a naive cross
//! product can report the wrong sign. Orientation tests here use Shewchuk's
//! adaptive precision arithmetic from the `robust` crate.
//!
//! ## References
//!
//! - Shewchuk, J.R. (1997). "Adaptive Precision Floating-Point Arithmetic and
//!   Fast Robust Predicates for Computational Geometry"
//! - <https://www.cs.cmu.edu/~quake/robust.html>
//!
//! ## Example
//!
//! ```rust
//! use caliper_core::robust::{orient2d, Orientation};
//! use caliper_core::Coordinate;
//!
//! let a = Coordinate::new(0.0, 0.0);
//! let b = Coordinate::new(1.0, 0.0);
//! let c = Coordinate::new(0.5, 1.0);
//!
//! assert_eq!(orient2d(a, b, c), Orientation::CounterClockwise);
//! ```

use crate::coord::Coordinate;
use robust::{orient2d as robust_orient2d, Coord};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise (left turn, positive area).
    CounterClockwise,
    /// Clockwise (right turn, negative area).
    Clockwise,
    /// Collinear, or a ring with no area.
    Collinear,
}

impl Orientation {
    /// Returns true if the orientation is counter-clockwise.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }

    /// Returns true if the orientation is clockwise.
    #[inline]
    pub fn is_cw(self) -> bool {
        matches!(self, Orientation::Clockwise)
    }

    /// Returns true if the points are collinear.
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

/// Determines the orientation of three points.
///
/// Returns `CounterClockwise` if `pc` lies to the left of the directed line
/// from `pa` to `pb`, `Clockwise` if it lies to the right, and `Collinear`
/// otherwise.
#[inline]
pub fn orient2d(pa: Coordinate, pb: Coordinate, pc: Coordinate) -> Orientation {
    let result = robust_orient2d(
        Coord { x: pa.lon, y: pa.lat },
        Coord { x: pb.lon, y: pb.lat },
        Coord { x: pc.lon, y: pc.lat },
    );

    if result > 0.0 {
        Orientation::CounterClockwise
    } else if result < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if a ring is convex, ignoring collinear vertex runs.
pub fn is_convex_robust(ring: &[Coordinate]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut expected: Option<Orientation> = None;

    for i in 0..n {
        let o = orient2d(ring[i], ring[(i + 1) % n], ring[(i + 2) % n]);

        if o.is_collinear() {
            continue;
        }

        match expected {
            None => expected = Some(o),
            Some(e) if e != o => return false,
            _ => {}
        }
    }

    true
}

/// Computes the signed area of a ring with the shoelace formula.
///
/// Positive for counter-clockwise rings, negative for clockwise ones. Kahan
/// summation keeps long rings with large coordinates stable.
pub fn signed_area_robust(ring: &[Coordinate]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut c = 0.0;

    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        let term = p.lon * q.lat - q.lon * p.lat;

        let y = term - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum / 2.0
}

/// Determines the winding order of a ring.
///
/// Uses the sign of the signed area. When the area vanishes (all vertices
/// collinear, or fewer than three), falls back to the turn at the
/// lowest-leftmost vertex, which is `Collinear` for a true segment.
pub fn winding(ring: &[Coordinate]) -> Orientation {
    let area = signed_area_robust(ring);
    if area > 0.0 {
        return Orientation::CounterClockwise;
    }
    if area < 0.0 {
        return Orientation::Clockwise;
    }

    let n = ring.len();
    if n < 3 {
        return Orientation::Collinear;
    }

    let mut min_idx = 0;
    for (i, c) in ring.iter().enumerate() {
        let m = ring[min_idx];
        if c.lat < m.lat || (c.lat == m.lat && c.lon < m.lon) {
            min_idx = i;
        }
    }

    orient2d(
        ring[(min_idx + n - 1) % n],
        ring[min_idx],
        ring[(min_idx + 1) % n],
    )
}
