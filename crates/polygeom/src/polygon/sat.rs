//! Separating-axis primitives: edge normals, projections, interval overlap.
//!
//! Two convex polygons are disjoint iff some edge normal of either one yields
//! non-overlapping projection intervals. Touching intervals count as overlap.

use super::Polygon;
use crate::cfg::AXIS_EPS_SQ;
use crate::vect::{Real, Vect};

/// Closed projection interval `[min, max]` along an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: Real,
    pub max: Real,
}

impl Interval {
    /// Result of projecting onto a (near-)zero axis.
    pub const DEGENERATE: Interval = Interval { min: 0.0, max: 0.0 };

    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn length(&self) -> Real {
        self.max - self.min
    }

    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Signed overlap depth; negative values are the gap between the intervals.
    #[inline]
    pub fn overlap(&self, other: &Interval) -> Real {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

impl From<Interval> for (Real, Real) {
    #[inline]
    fn from(i: Interval) -> Self {
        (i.min, i.max)
    }
}

/// Unit left-normals of each edge `(v[i], v[i+1 mod n])`, in edge order.
///
/// Zero-length edges give the zero axis. Parallel edges are not deduplicated.
fn edge_axes(ring: &[Vect]) -> Vec<Vect> {
    let n = ring.len();
    (0..n)
        .map(|i| (ring[(i + 1) % n] - ring[i]).perp().normalize())
        .collect()
}

fn project_ring(ring: &[Vect], axis: Vect) -> Interval {
    if axis.magnitude_squared() < AXIS_EPS_SQ {
        return Interval::DEGENERATE;
    }
    let unit = axis.normalize();
    ring.iter().map(|v| v.dot(unit)).fold(
        Interval::new(Real::MAX, Real::MIN),
        |acc, p| Interval::new(acc.min.min(p), acc.max.max(p)),
    )
}

impl Polygon {
    /// SAT candidate axes of the transformed polygon, one per edge.
    pub fn axes(&self) -> Vec<Vect> {
        edge_axes(&self.transformed_vertices())
    }

    /// Extent of the transformed polygon along `axis` (normalized internally).
    ///
    /// Axes with squared length below `cfg::AXIS_EPS_SQ` give `Interval::DEGENERATE`.
    pub fn project(&self, axis: Vect) -> Interval {
        project_ring(&self.transformed_vertices(), axis)
    }
}

/// First edge normal (of `a`, then of `b`) along which the polygons do not overlap.
///
/// Exact for convex polygons; for concave input the answer is that of the
/// polygons' convex hulls only when no separating axis is missed.
pub fn separating_axis(a: &Polygon, b: &Polygon) -> Option<Vect> {
    let ring_a = a.transformed_vertices();
    let ring_b = b.transformed_vertices();
    edge_axes(&ring_a)
        .into_iter()
        .chain(edge_axes(&ring_b))
        .filter(|axis| axis.magnitude_squared() >= AXIS_EPS_SQ)
        .find(|&axis| !project_ring(&ring_a, axis).overlaps(&project_ring(&ring_b, axis)))
}

/// Whether two convex polygons overlap (touching counts).
#[inline]
pub fn intersects(a: &Polygon, b: &Polygon) -> bool {
    separating_axis(a, b).is_none()
}
