//! Moment of inertia via fan triangulation and the parallel-axis theorem.
//!
//! Algorithm
//! - Shoelace area `A` and vertex centroid `c` of the local ring.
//! - Fan from `v[0]`: triangles `(v[0], v[i], v[i+1])`, `i = 1..n-2`.
//! - Each triangle gets mass `m · A_t / A`, its own centroidal moment
//!   `m_t (a² + b² + c²) / 36`, and is shifted to `c` by `m_t · |c_t − c|²`.
//!
//! The fan tiles convex polygons and polygons star-shaped from `v[0]`. Any other
//! ring is rejected (`NotFanTriangulable`) instead of producing a wrong moment,
//! so every `Ok` result distributes exactly the supplied mass (up to rounding).
//!
//! Accumulation is in `f64` regardless of the `f32` vertex storage.

use nalgebra::Vector2;

use super::PolygonError;
use crate::vect::Vect;

/// Tolerances for the mass-property path.
#[derive(Clone, Copy, Debug)]
pub struct MassCfg {
    /// Areas at or below `area_rel_eps · r²` are treated as zero, where `r` is
    /// the largest vertex distance from the vertex centroid.
    pub area_rel_eps: f64,
    /// Allowed relative mismatch between the fan area and the shoelace area.
    pub fan_rel_tol: f64,
}

impl Default for MassCfg {
    fn default() -> Self {
        Self {
            area_rel_eps: 1e-9,
            fan_rel_tol: 1e-4,
        }
    }
}

#[inline]
fn planar(v: &Vect) -> Vector2<f64> {
    Vector2::new(v.x() as f64, v.y() as f64)
}

/// One triangle `(v[0], v[i], v[i+1])` of the fan, in `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanTriangle {
    pub corners: [Vector2<f64>; 3],
}

impl FanTriangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { corners: [a, b, c] }
    }

    /// Unsigned area `|e1 × e2| / 2`.
    #[inline]
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.corners;
        let e1 = b - a;
        let e2 = c - a;
        (e1.x * e2.y - e1.y * e2.x).abs() / 2.0
    }

    #[inline]
    pub fn centroid(&self) -> Vector2<f64> {
        let [a, b, c] = self.corners;
        (a + b + c) / 3.0
    }

    /// Area-proportional share of `total_mass`.
    #[inline]
    pub fn mass_share(&self, total_mass: f64, total_area: f64) -> f64 {
        total_mass * (self.area() / total_area)
    }

    /// Moment about the triangle's own centroid: `mass (a² + b² + c²) / 36`.
    #[inline]
    pub fn moment(&self, mass: f64) -> f64 {
        let [a, b, c] = self.corners;
        let sides_sq = (b - a).norm_squared() + (c - b).norm_squared() + (a - c).norm_squared();
        mass * sides_sq / 36.0
    }
}

/// Absolute shoelace area of the ring.
pub fn polygon_area(vertices: &[Vect]) -> Result<f64, PolygonError> {
    PolygonError::check_shape(vertices)?;
    let n = vertices.len();
    let mut twice = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        let (p, q) = (planar(&vertices[j]), planar(&vertices[i]));
        twice += p.x * q.y - q.x * p.y;
        j = i;
    }
    Ok((twice / 2.0).abs())
}

/// Fan triangulation from vertex 0 (`n - 2` triangles).
pub fn fan_triangles(vertices: &[Vect]) -> Result<Vec<FanTriangle>, PolygonError> {
    PolygonError::check_shape(vertices)?;
    let apex = planar(&vertices[0]);
    Ok(vertices[1..]
        .windows(2)
        .map(|w| FanTriangle::new(apex, planar(&w[0]), planar(&w[1])))
        .collect())
}

/// Moment of inertia about the vertex centroid with default tolerances.
pub fn moment_of_inertia(vertices: &[Vect], mass: f64) -> Result<f64, PolygonError> {
    moment_of_inertia_with(vertices, mass, &MassCfg::default())
}

/// Moment of inertia about the vertex centroid.
///
/// Errors, in check order: `InvalidShape` (< 3 vertices), `InvalidArgument`
/// (mass not finite and positive), `DegenerateGeometry` (area ≤ `area_rel_eps · r²`),
/// `NotFanTriangulable` (fan area ≠ polygon area beyond `fan_rel_tol`).
pub fn moment_of_inertia_with(
    vertices: &[Vect],
    mass: f64,
    cfg: &MassCfg,
) -> Result<f64, PolygonError> {
    let total_area = polygon_area(vertices)?;
    if !(mass.is_finite() && mass > 0.0) {
        tracing::debug!(mass, "rejecting non-positive mass");
        return Err(PolygonError::invalid(format!(
            "mass must be positive and finite, got {mass}"
        )));
    }
    let centroid = vertices.iter().map(planar).sum::<Vector2<f64>>() / vertices.len() as f64;
    let reach_sq = vertices
        .iter()
        .map(|v| (planar(v) - centroid).norm_squared())
        .fold(0.0, f64::max);
    if total_area.is_nan() || total_area <= cfg.area_rel_eps * reach_sq {
        tracing::debug!(area = total_area, reach_sq, vertices = vertices.len(), "degenerate polygon");
        return Err(PolygonError::DegenerateGeometry { area: total_area });
    }

    let triangles = fan_triangles(vertices)?;
    let fan_area: f64 = triangles.iter().map(FanTriangle::area).sum();
    if (fan_area - total_area).abs() > cfg.fan_rel_tol * total_area {
        tracing::debug!(fan_area, total_area, "fan does not tile polygon");
        return Err(PolygonError::NotFanTriangulable {
            fan_area,
            polygon_area: total_area,
        });
    }

    let moment: f64 = triangles
        .iter()
        .map(|t| {
            let m = t.mass_share(mass, total_area);
            m * (t.centroid() - centroid).norm_squared() + t.moment(m)
        })
        .sum();
    tracing::trace!(vertices = vertices.len(), mass, area = total_area, moment, "moment_of_inertia");
    Ok(moment)
}
