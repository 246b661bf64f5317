//! Hull extraction.
//!
//! Reduces a point set to an ordered ring using `geo`'s hull algorithms. The
//! diameter only depends on the convex hull, so [`HullKind::Convex`] is the
//! default; concave hulls are offered for callers that already work with them.

use caliper_core::{Coordinate, Error, Result};
use geo::{ConcaveHull, ConvexHull, MultiPoint, Point, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Produces an ordered boundary ring from a point set.
pub trait HullExtractor {
    /// Returns the hull of `points` as a ring. The ring may be closed (first
    /// vertex repeated at the end) and may be wound either way.
    fn hull(&self, points: &[Coordinate]) -> Vec<Coordinate>;
}

/// Convex hull via `geo::ConvexHull`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvexHullExtractor;

/// Concave hull via `geo::ConcaveHull`.
///
/// Smaller `concavity` values follow the points more tightly. Rotating
/// calipers assume convexity, so the result on a concave ring can be shorter
/// than the true diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcaveHullExtractor {
    /// Concavity parameter passed to `geo`.
    pub concavity: f64,
}

/// Hull algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HullKind {
    /// Convex hull.
    #[default]
    Convex,
    /// Concave hull with the given concavity.
    Concave {
        /// Concavity parameter (> 0).
        concavity: f64,
    },
}

impl HullKind {
    /// Checks the hull parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            HullKind::Convex => Ok(()),
            HullKind::Concave { concavity } if concavity.is_finite() && concavity > 0.0 => Ok(()),
            HullKind::Concave { concavity } => Err(Error::InvalidConfig(format!(
                "concavity must be finite and positive, got {}",
                concavity
            ))),
        }
    }
}

/// Distinct points in input order, or `None` if there are at least three
/// (enough for a hull algorithm).
fn few_distinct(points: &[Coordinate]) -> Option<Vec<Coordinate>> {
    let mut distinct: Vec<Coordinate> = Vec::with_capacity(3);
    for &p in points {
        if !distinct.contains(&p) {
            distinct.push(p);
            if distinct.len() == 3 {
                return None;
            }
        }
    }
    Some(distinct)
}

fn multi_point(points: &[Coordinate]) -> MultiPoint<f64> {
    MultiPoint::new(points.iter().map(|c| Point::new(c.lon, c.lat)).collect())
}

fn exterior_ring(polygon: &Polygon<f64>) -> Vec<Coordinate> {
    polygon
        .exterior()
        .coords()
        .map(|c| Coordinate::new(c.x, c.y))
        .collect()
}

impl HullExtractor for ConvexHullExtractor {
    fn hull(&self, points: &[Coordinate]) -> Vec<Coordinate> {
        if let Some(distinct) = few_distinct(points) {
            return distinct;
        }
        exterior_ring(&multi_point(points).convex_hull())
    }
}

impl HullExtractor for ConcaveHullExtractor {
    fn hull(&self, points: &[Coordinate]) -> Vec<Coordinate> {
        if let Some(distinct) = few_distinct(points) {
            return distinct;
        }
        exterior_ring(&multi_point(points).concave_hull(self.concavity))
    }
}

impl HullExtractor for HullKind {
    fn hull(&self, points: &[Coordinate]) -> Vec<Coordinate> {
        match *self {
            HullKind::Convex => ConvexHullExtractor.hull(points),
            HullKind::Concave { concavity } => ConcaveHullExtractor { concavity }.hull(points),
        }
    }
}
