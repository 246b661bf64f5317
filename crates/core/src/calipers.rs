//! Rotating-calipers diameter sweep.
//!
//! Two calipers rest on edges `i` and `j` of a counter-clockwise ring. At each
//! step the caliper with the smaller remaining turn rotates onto its next edge,
//! and the newly touching vertex pair is measured. When both gaps are equal the
//! calipers rotate together and all three new pairs are measured. The sweep ends
//! after half a turn: `j` has wrapped back to edge 0 and `i` has reached the
//! edge `j` started from. That is at most `2n` steps on a convex ring.
//!
//! Non-convex rings still terminate (each caliper gets a bounded number of
//! laps), but the result may fall short of the true diameter. When no edge
//! turns at least π away from edge 0 there is nothing to sweep, and every
//! vertex pair is measured instead.
//!
//! ## Example
//!
//! ```rust
//! use caliper_core::{Config, DiameterEngine, Planar, Ring};
//!
//! let ring = Ring::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]).unwrap();
//! let diameter = DiameterEngine::new(Config::default())
//!     .measure(&ring, &Planar, &Planar)
//!     .unwrap();
//!
//! assert!((diameter.length - 5.0).abs() < 1e-12);
//! ```

use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::angle::{angle_between_tolerant, cmp_pi};
use crate::config::Config;
use crate::coord::Coordinate;
use crate::metric::{BearingFn, DistanceFn};
use crate::ring::Ring;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indices of the two edges the calipers currently rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaliperPair {
    /// Edge under the first caliper.
    pub i: usize,
    /// Edge under the second caliper.
    pub j: usize,
}

impl CaliperPair {
    /// Starting position: first caliper on edge 0, second on edge 1.
    pub fn start() -> Self {
        Self { i: 0, j: 1 }
    }

    /// Rotates the first caliper onto its next edge.
    #[inline]
    pub fn advance_i(&mut self, ring: &Ring) {
        self.i = ring.next(self.i);
    }

    /// Rotates the second caliper onto its next edge.
    #[inline]
    pub fn advance_j(&mut self, ring: &Ring) {
        self.j = ring.next(self.j);
    }
}

/// Largest distance seen so far, with the pair that produced it.
#[derive(Debug, Clone, Copy)]
struct RunningMaximum {
    length: f64,
    endpoints: (Coordinate, Coordinate),
}

impl RunningMaximum {
    fn new(p: Coordinate, q: Coordinate, length: f64) -> Self {
        Self {
            length,
            endpoints: (p, q),
        }
    }

    /// Measures the vertex pair `(a, b)` and keeps it if it is strictly longer.
    fn offer<D>(&mut self, ring: &Ring, a: usize, b: usize, distance: &D)
    where
        D: DistanceFn + ?Sized,
    {
        let p = ring.get(a);
        let q = ring.get(b);
        let d = distance.distance(p, q);
        if d > self.length {
            self.length = d;
            self.endpoints = (p, q);
        }
    }
}

/// Diameter of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diameter {
    /// Largest distance between two vertices, in the metric's unit.
    pub length: f64,
    /// The two vertices at that distance.
    pub endpoints: (Coordinate, Coordinate),
    /// Number of caliper advancements performed.
    pub steps: usize,
}

/// Runs the rotating-calipers sweep.
#[derive(Debug, Clone, Default)]
pub struct DiameterEngine {
    config: Config,
}

impl DiameterEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Canonicalizes `ring` according to the configured winding policy and
    /// measures its diameter.
    pub fn measure<D, B>(&self, ring: &Ring, distance: &D, bearing: &B) -> Result<Diameter>
    where
        D: DistanceFn + ?Sized,
        B: BearingFn + ?Sized,
    {
        self.config.validate()?;
        let ring = ring.clone().canonicalize(self.config.winding);
        Ok(self.sweep(&ring, distance, bearing))
    }

    /// Measures the diameter of a ring that is already counter-clockwise.
    ///
    /// Rings of one vertex measure 0 and rings of two vertices measure the
    /// distance between them; neither enters the sweep.
    pub fn sweep<D, B>(&self, ring: &Ring, distance: &D, bearing: &B) -> Diameter
    where
        D: DistanceFn + ?Sized,
        B: BearingFn + ?Sized,
    {
        let n = ring.len();
        if n < 3 {
            let (p, q) = (ring.get(0), ring.get(n - 1));
            let length = if n == 1 { 0.0 } else { distance.distance(p, q) };
            return Diameter {
                length,
                endpoints: (p, q),
                steps: 0,
            };
        }

        let tol = self.config.angle_tolerance;
        let angle = |pair: &CaliperPair| angle_between_tolerant(ring, pair.i, pair.j, bearing, tol);

        let mut pair = CaliperPair::start();
        let mut steps = 0;

        // Find the first edge facing edge 0
        while pair.i != pair.j && cmp_pi(angle(&pair), tol) == Ordering::Less {
            pair.advance_j(ring);
            steps += 1;
        }

        // Every edge turned less than π from edge 0: the bearings do not
        // describe a convex ring, so there is no antipodal edge to start from.
        if pair.j == pair.i {
            log::warn!(
                "no edge of the {}-vertex ring faces edge 0; measuring all vertex pairs",
                n
            );
            return Self::all_pairs(ring, distance, steps);
        }

        let far = pair.j;
        let (p, q) = (ring.get(pair.i), ring.get(pair.j));
        let mut max = RunningMaximum::new(p, q, distance.distance(p, q));

        // Half a turn is complete when `j` is back on edge 0 and `i` has
        // reached the edge `j` started from.
        let mut laps = 0;
        while !(pair.j == 0 && pair.i == far) {
            let gap = TAU - angle(&pair);
            let (i, j) = (pair.i, pair.j);

            let (advance_i, advance_j) = match cmp_pi(gap, tol) {
                Ordering::Equal => {
                    max.offer(ring, i + 1, j, distance);
                    max.offer(ring, i, j + 1, distance);
                    max.offer(ring, i + 1, j + 1, distance);
                    (true, true)
                }
                Ordering::Less => {
                    max.offer(ring, i + 1, j, distance);
                    (true, false)
                }
                Ordering::Greater => {
                    max.offer(ring, i, j + 1, distance);
                    (false, true)
                }
            };

            if advance_i {
                pair.advance_i(ring);
                steps += 1;
            }
            if advance_j {
                pair.advance_j(ring);
                steps += 1;
                if pair.j == 0 {
                    laps += 1;
                }
            }

            log::trace!(
                "caliper step: gap={:.6} rad -> ({}, {}), max={}",
                gap,
                pair.i,
                pair.j,
                max.length
            );

            // Only reachable on non-convex rings, where edge directions are
            // not monotonic.
            if (advance_i && pair.i == 0) || laps > 1 {
                log::warn!(
                    "caliper sweep did not close on a {}-vertex ring; ring is likely not convex",
                    n
                );
                break;
            }
        }

        log::debug!(
            "diameter {} over {} vertices in {} steps",
            max.length,
            n,
            steps
        );

        Diameter {
            length: max.length,
            endpoints: max.endpoints,
            steps,
        }
    }

    fn all_pairs<D>(ring: &Ring, distance: &D, steps: usize) -> Diameter
    where
        D: DistanceFn + ?Sized,
    {
        let (p, q) = (ring.get(0), ring.get(1));
        let mut max = RunningMaximum::new(p, q, distance.distance(p, q));
        for a in 0..ring.len() {
            for b in (a + 1)..ring.len() {
                max.offer(ring, a, b, distance);
            }
        }

        Diameter {
            length: max.length,
            endpoints: max.endpoints,
            steps,
        }
    }
}

/// Diameter of a sequence of coordinates with the default configuration.
///
/// `coords` is the hull ring in either winding; it is canonicalized before the
/// sweep. Fails with [`Error::InvalidInput`](crate::Error::InvalidInput) when
/// `coords` is empty.
pub fn diameter<D, B>(coords: &[Coordinate], distance: &D, bearing: &B) -> Result<f64>
where
    D: DistanceFn + ?Sized,
    B: BearingFn + ?Sized,
{
    let ring = Ring::new(coords.to_vec())?;
    DiameterEngine::default()
        .measure(&ring, distance, bearing)
        .map(|d| d.length)
}

/// All-pairs diameter of a point set, `O(n²)`.
///
/// Reference for the sweep: the diameter of a point set equals the diameter of
/// its hull. Returns 0 for fewer than two points.
pub fn exhaustive_diameter<D>(points: &[Coordinate], distance: &D) -> f64
where
    D: DistanceFn + ?Sized,
{
    let mut max = 0.0_f64;
    for (k, &p) in points.iter().enumerate() {
        for &q in &points[k + 1..] {
            max = max.max(distance.distance(p, q));
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Winding;
    use crate::metric::Planar;
    use crate::Error;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ring(points: &[(f64, f64)]) -> Ring {
        Ring::from_points(points.iter().copied()).unwrap()
    }

    fn measure(points: &[(f64, f64)]) -> Diameter {
        DiameterEngine::default()
            .measure(&ring(points), &Planar, &Planar)
            .unwrap()
    }

    /// Monotone chain hull, counter-clockwise, without collinear points.
    fn convex_hull(points: &[Coordinate]) -> Vec<Coordinate> {
        let mut pts = points.to_vec();
        pts.sort_by(|a, b| a.lon.total_cmp(&b.lon).then(a.lat.total_cmp(&b.lat)));
        pts.dedup();
        if pts.len() < 3 {
            return pts;
        }

        let cross = |o: Coordinate, a: Coordinate, b: Coordinate| {
            (a.lon - o.lon) * (b.lat - o.lat) - (a.lat - o.lat) * (b.lon - o.lon)
        };

        let mut hull: Vec<Coordinate> = Vec::with_capacity(2 * pts.len());
        for &p in &pts {
            while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }
        let lower = hull.len() + 1;
        for &p in pts.iter().rev().skip(1) {
            while hull.len() >= lower && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop();
        hull
    }

    #[test]
    fn test_empty_input_fails() {
        let err = diameter(&[], &Planar, &Planar).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_single_point_is_zero() {
        let d = measure(&[(3.0, 4.0)]);
        assert_eq!(d.length, 0.0);
        assert_eq!(d.steps, 0);
    }

    #[test]
    fn test_two_points_direct_distance() {
        let d = measure(&[(0.0, 0.0), (3.0, 4.0)]);
        assert_relative_eq!(d.length, 5.0);
        assert_eq!(d.steps, 0);
    }

    #[test]
    fn test_three_collinear_points() {
        let d = measure(&[(0.0, 0.0), (1.0, 0.0), (5.0, 0.0)]);
        assert_relative_eq!(d.length, 5.0);

        let d = measure(&[(0.0, 0.0), (0.0, 2.0), (0.0, 7.0)]);
        assert_relative_eq!(d.length, 7.0);
    }

    #[test]
    fn test_square_tie_branch() {
        // Parallel opposite edges hit the exact-tie case on every step
        let d = measure(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_relative_eq!(d.length, 2.0_f64.sqrt());
    }

    #[test]
    fn test_triangle() {
        let d = measure(&[(0.0, 0.0), (4.0, 0.0), (0.0, 1.0)]);
        assert_relative_eq!(d.length, 17.0_f64.sqrt());
        let (p, q) = d.endpoints;
        let mut ends = [p.xy(), q.xy()];
        ends.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(ends, [(0.0, 1.0), (4.0, 0.0)]);
    }

    #[test]
    fn test_winding_invariance() {
        let ccw = [(0.0, 0.0), (6.0, 1.0), (7.0, 4.0), (3.0, 6.0), (-1.0, 3.0)];
        let cw: Vec<(f64, f64)> = ccw.iter().rev().copied().collect();
        assert_eq!(measure(&ccw).length, measure(&cw).length);
    }

    #[test]
    fn test_reverse_policy_on_clockwise_input() {
        let cw = ring(&[(0.0, 0.0), (0.0, 3.0), (4.0, 3.0), (4.0, 0.0)]);
        let engine = DiameterEngine::new(Config::new().with_winding(Winding::Reverse));
        let d = engine.measure(&cw, &Planar, &Planar).unwrap();
        assert_relative_eq!(d.length, 5.0);
    }

    #[test]
    fn test_closed_ring_input() {
        let d = measure(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (0.0, 0.0)]);
        assert_relative_eq!(d.length, 5.0);
    }

    #[test]
    fn test_idempotent() {
        let r = ring(&[(0.0, 0.0), (6.0, 1.0), (7.0, 4.0), (3.0, 6.0), (-1.0, 3.0)]);
        let engine = DiameterEngine::default();
        let a = engine.measure(&r, &Planar, &Planar).unwrap();
        let b = engine.measure(&r, &Planar, &Planar).unwrap();
        assert_eq!(a.length.to_bits(), b.length.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let engine = DiameterEngine::new(Config::new().with_angle_tolerance(-1.0));
        assert_eq!(engine.config().angle_tolerance, -1.0);
        let err = engine
            .measure(&ring(&[(0.0, 0.0), (1.0, 1.0)]), &Planar, &Planar)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_regular_polygon_step_bound() {
        for n in [3usize, 4, 5, 7, 12, 33, 100] {
            let points: Vec<(f64, f64)> = (0..n)
                .map(|k| {
                    let t = k as f64 * TAU / n as f64;
                    (10.0 * t.cos(), 10.0 * t.sin())
                })
                .collect();
            let d = measure(&points);
            let expected = exhaustive_diameter(ring(&points).coords(), &Planar);
            assert_relative_eq!(d.length, expected, max_relative = 1e-12);
            assert!(d.steps <= 2 * n, "n={} took {} steps", n, d.steps);
        }
    }

    #[test]
    fn test_matches_exhaustive_on_random_point_sets() {
        let mut rng = StdRng::seed_from_u64(0x0ca1_1e75);
        for _ in 0..200 {
            let count = rng.gen_range(3..60);
            let points: Vec<Coordinate> = (0..count)
                .map(|_| Coordinate::new(rng.gen_range(-50.0..50.0), rng.gen_range(-20.0..20.0)))
                .collect();

            let hull = convex_hull(&points);
            let swept = diameter(&hull, &Planar, &Planar).unwrap();
            let brute = exhaustive_diameter(&points, &Planar);
            assert_relative_eq!(swept, brute, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_independent_closures() {
        let euclid = |p: Coordinate, q: Coordinate| (q.lon - p.lon).hypot(q.lat - p.lat);
        let compass = crate::metric::Bearing(|p: Coordinate, q: Coordinate| {
            (q.lon - p.lon).atan2(q.lat - p.lat).to_degrees()
        });
        let coords: Vec<Coordinate> = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]
            .iter()
            .map(|&p| p.into())
            .collect();
        assert_relative_eq!(diameter(&coords, &euclid, &compass).unwrap(), 5.0);
    }

    #[test]
    fn test_no_facing_edge_measures_all_pairs() {
        // A bearing that never changes makes every edge parallel to edge 0,
        // so the setup loop runs all the way around the ring.
        let still = crate::metric::Bearing(|_: Coordinate, _: Coordinate| 45.0);
        let r = ring(&[(0.0, 0.0), (6.0, 1.0), (7.0, 4.0), (3.0, 6.0), (-1.0, 3.0)]);

        let d = DiameterEngine::default().sweep(&r, &Planar, &still);
        assert_relative_eq!(d.length, exhaustive_diameter(r.coords(), &Planar));
        assert!(d.length > 0.0);
        let (p, q) = d.endpoints;
        assert_ne!(p, q);
        assert_relative_eq!(Planar.distance(p, q), d.length);
    }

    #[test]
    fn test_exhaustive_degenerate() {
        assert_eq!(exhaustive_diameter(&[], &Planar), 0.0);
        assert_eq!(exhaustive_diameter(&[Coordinate::new(1.0, 1.0)], &Planar), 0.0);
    }
}
