//! Angular bookkeeping between ring edges.

use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use crate::metric::BearingFn;
use crate::ring::Ring;

/// Counter-clockwise rotation from the direction of edge `a` to the direction
/// of edge `b`, in radians within `[0, 2π)`.
///
/// Bearings are compass angles (clockwise-positive), so each is negated before
/// taking the difference. `0` means both edges point the same way and `π`
/// means they point in opposite directions. Indices wrap around the ring.
///
/// The bearing of edge `a` is carried to the start of edge `b` with
/// [`BearingFn::convergence`] first, so both directions share one north.
pub fn angle_between<B>(ring: &Ring, a: usize, b: usize, bearing: &B) -> f64
where
    B: BearingFn + ?Sized,
{
    let (a0, a1) = ring.edge(a);
    let (b0, b1) = ring.edge(b);
    let theta_a = -(bearing.bearing(a0, a1) + bearing.convergence(a0, b0));
    let theta_b = -bearing.bearing(b0, b1);
    normalize((theta_b - theta_a).to_radians())
}

/// Reduces an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 2π; those fold back
/// to 0.
#[inline]
pub fn normalize(angle: f64) -> f64 {
    let r = angle.rem_euclid(TAU);
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Like [`angle_between`], but angles within `tolerance` of a full turn read
/// as 0, so edges with the same direction up to rounding never look like a
/// complete revolution.
pub fn angle_between_tolerant<B>(ring: &Ring, a: usize, b: usize, bearing: &B, tolerance: f64) -> f64
where
    B: BearingFn + ?Sized,
{
    let angle = angle_between(ring, a, b, bearing);
    if TAU - angle <= tolerance {
        0.0
    } else {
        angle
    }
}

/// Compares an angle with π, treating values within `tolerance` as equal.
#[inline]
pub fn cmp_pi(angle: f64, tolerance: f64) -> Ordering {
    if (angle - PI).abs() <= tolerance {
        Ordering::Equal
    } else if angle < PI {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
