//! Polygons with a world pose: transform, SAT primitives, mass properties.
//!
//! Purpose
//! - Hold an ordered ring of local-space vertices plus a mutable pose
//!   (`position`, `rotation`) and derive world-space geometry on demand.
//! - Compute the rotational moment of inertia from the local vertices alone.
//!
//! Conventions
//! - Vertex order is significant: edge `i` runs from `v[i]` to `v[(i+1) % n]`.
//! - Rotation is applied about the polygon's own vertex centroid, then the
//!   world position is added. Nothing derived is cached between queries.
//! - Only `x`/`y` of the local vertices enter the planar transform.
//! - Degenerate vectors (zero-length edges or axes) are not errors; they
//!   resolve to the zero axis and the `(0, 0)` interval respectively.
//!
//! References
//! - Code cross-refs: `transform`, `sat`, `mass`, `crate::vect::Vect`

mod mass;
mod sat;
mod transform;

use std::fmt;

pub use mass::{
    fan_triangles, moment_of_inertia, moment_of_inertia_with, polygon_area, FanTriangle, MassCfg,
};
pub use sat::{intersects, separating_axis, Interval};
pub use transform::centroid;

use crate::vect::{Real, Vect};

/// Minimum vertex count for any polygon-level query.
pub const MIN_VERTICES: usize = 3;

/// Errors surfaced by polygon construction and mass-property computation.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Fewer than three vertices.
    InvalidShape { count: usize },
    /// A scalar argument is out of its domain (e.g. non-positive mass).
    InvalidArgument { reason: String },
    /// The polygon encloses (numerically) zero area.
    DegenerateGeometry { area: f64 },
    /// The fan from vertex 0 does not tile the polygon (not star-shaped from `v[0]`).
    NotFanTriangulable { fan_area: f64, polygon_area: f64 },
}

impl PolygonError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    #[inline]
    pub(crate) fn check_shape(vertices: &[Vect]) -> Result<(), Self> {
        if vertices.len() < MIN_VERTICES {
            return Err(Self::InvalidShape {
                count: vertices.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { count } => write!(
                f,
                "polygon needs at least {MIN_VERTICES} vertices, got {count}"
            ),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::DegenerateGeometry { area } => {
                write!(f, "polygon is degenerate (area {area:e})")
            }
            Self::NotFanTriangulable {
                fan_area,
                polygon_area,
            } => write!(
                f,
                "fan from vertex 0 covers area {fan_area} but polygon area is {polygon_area} \
                 (not star-shaped from vertex 0)"
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Ordered local-space vertex ring with a world pose.
///
/// Invariants:
/// - At least `MIN_VERTICES` vertices (checked at construction).
/// - Vertices are fixed after construction; only the pose is mutable.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vect>,
    /// World-space offset applied after rotation.
    pub position: Vect,
    /// Rotation about the vertex centroid, in radians (counter-clockwise).
    pub rotation: Real,
}

impl Polygon {
    /// Polygon at the origin with zero rotation.
    pub fn new(vertices: Vec<Vect>) -> Result<Self, PolygonError> {
        Self::with_position(vertices, Vect::zero())
    }

    pub fn with_position(vertices: Vec<Vect>, position: Vect) -> Result<Self, PolygonError> {
        PolygonError::check_shape(&vertices)?;
        Ok(Self {
            vertices,
            position,
            rotation: 0.0,
        })
    }

    /// Local-space vertices in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[Vect] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Bounding-circle radius: largest local vertex distance from the local origin.
    ///
    /// Ignores pose; callers add `position` and the centroid offset themselves.
    pub fn radius(&self) -> Real {
        self.vertices
            .iter()
            .map(Vect::magnitude)
            .fold(0.0, Real::max)
    }

    /// Moment of inertia about the vertex centroid for a total `mass`.
    ///
    /// Pose-independent; delegates to [`moment_of_inertia`] on the local vertices.
    pub fn moment_of_inertia(&self, mass: f64) -> Result<f64, PolygonError> {
        moment_of_inertia(&self.vertices, mass)
    }
}
