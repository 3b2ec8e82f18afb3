//! Local-to-world transform: rotate about the vertex centroid, then translate.

use nalgebra::{Rotation2, Vector2};

use super::{Polygon, PolygonError};
use crate::vect::{Real, Vect};

/// Arithmetic mean of the vertex positions (planar; `z`/`w` are dropped).
pub fn centroid(vertices: &[Vect]) -> Result<Vect, PolygonError> {
    PolygonError::check_shape(vertices)?;
    Ok(planar_mean(vertices))
}

#[inline]
fn planar_mean(vertices: &[Vect]) -> Vect {
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x(), sy + v.y()));
    let n = vertices.len() as Real;
    Vect::new(sx / n, sy / n)
}

impl Polygon {
    /// Vertex centroid of the local vertices. Independent of the pose.
    #[inline]
    pub fn centroid(&self) -> Vect {
        planar_mean(&self.vertices)
    }

    /// World-space vertices for the current pose, freshly computed.
    ///
    /// `world = R(rotation) · (v − c) + c + position` with `c = centroid()`.
    /// The transform is planar: only `x`/`y` take part and the results have
    /// `z = w = 0`. At zero rotation the centroid round trip is skipped, so the
    /// identity pose returns planar local vertices bit-for-bit.
    pub fn transformed_vertices(&self) -> Vec<Vect> {
        let p = Vector2::new(self.position.x(), self.position.y());
        if self.rotation == 0.0 {
            return self
                .vertices
                .iter()
                .map(|v| Vect::new(v.x() + p.x, v.y() + p.y))
                .collect();
        }
        let c = self.centroid();
        let c = Vector2::new(c.x(), c.y());
        let rot = Rotation2::new(self.rotation);
        self.vertices
            .iter()
            .map(|v| {
                let local = Vector2::new(v.x(), v.y()) - c;
                let world = rot * local + c + p;
                Vect::new(world.x, world.y)
            })
            .collect()
    }
}
