//! Closed polygonal rings with wraparound indexing.

use crate::config::Winding;
use crate::coord::Coordinate;
use crate::robust::{self, Orientation};
use crate::{Error, Result};

/// An ordered, closed sequence of coordinates.
///
/// Index `n` is index `0`: every accessor reduces its index modulo the ring
/// length. Edge `a` runs from `ring[a]` to `ring[a + 1]`. The closing edge is
/// implicit, so the last vertex should not repeat the first (see
/// [`Ring::canonicalize`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    coords: Vec<Coordinate>,
}

impl Ring {
    /// Creates a ring from its vertices.
    ///
    /// Fails with [`Error::InvalidInput`] on an empty sequence and with
    /// [`Error::InvalidGeometry`] on non-finite coordinates.
    pub fn new(coords: Vec<Coordinate>) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::InvalidInput(
                "ring must contain at least one coordinate".into(),
            ));
        }
        if let Some(idx) = coords.iter().position(|c| !c.is_finite()) {
            return Err(Error::InvalidGeometry(format!(
                "coordinate {} is not finite: {:?}",
                idx, coords[idx]
            )));
        }
        Ok(Self { coords })
    }

    /// Creates a ring from anything convertible to coordinates.
    pub fn from_points<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Coordinate>,
    {
        Self::new(points.into_iter().map(Into::into).collect())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the vertices in ring order.
    #[inline]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Reduces an index into `0..len`.
    #[inline]
    pub fn wrap(&self, idx: usize) -> usize {
        idx % self.coords.len()
    }

    /// Returns the index following `idx`.
    #[inline]
    pub fn next(&self, idx: usize) -> usize {
        (idx + 1) % self.coords.len()
    }

    /// Returns the vertex at `idx`, wrapping past the end.
    #[inline]
    pub fn get(&self, idx: usize) -> Coordinate {
        self.coords[self.wrap(idx)]
    }

    /// Returns the endpoints of edge `a`.
    #[inline]
    pub fn edge(&self, a: usize) -> (Coordinate, Coordinate) {
        (self.get(a), self.get(a + 1))
    }

    /// Returns the ring with its vertex order reversed.
    pub fn reversed(&self) -> Self {
        let mut coords = self.coords.clone();
        coords.reverse();
        Self { coords }
    }

    /// Signed shoelace area in coordinate units (positive when counter-clockwise).
    pub fn signed_area(&self) -> f64 {
        robust::signed_area_robust(&self.coords)
    }

    /// Winding order of the ring.
    pub fn winding(&self) -> Orientation {
        robust::winding(&self.coords)
    }

    /// Returns true if the ring winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.winding().is_ccw()
    }

    /// Returns true if every turn of the ring has the same sense.
    pub fn is_convex(&self) -> bool {
        robust::is_convex_robust(&self.coords)
    }

    /// Brings the ring into the form the caliper sweep expects.
    ///
    /// Drops the explicit closing vertex and consecutive duplicates, then
    /// applies the winding policy so the ring runs counter-clockwise.
    pub fn canonicalize(self, winding: Winding) -> Self {
        let mut coords = self.coords;
        coords.dedup();
        while coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }

        let ring = Self { coords };
        let reverse = match winding {
            Winding::Detect => ring.winding().is_cw(),
            Winding::Reverse => true,
            Winding::Preserve => false,
        };

        if reverse {
            log::trace!("reversing {}-vertex ring to counter-clockwise", ring.len());
            ring.reversed()
        } else {
            ring
        }
    }
}
