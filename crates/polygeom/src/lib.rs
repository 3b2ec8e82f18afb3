//! 2D polygon kernel for physics simulation.
//!
//! Layers (leaf first)
//! - `vect`: four-component value vector (`Vect`) over the `f32` scalar `Real`.
//! - `polygon`: local vertex ring plus pose; transformed vertices, SAT axes,
//!   projections, and the fan-triangulated moment of inertia.
//! - `shapes`, `convert`: vertex-ring builders and host-type adapters. Neither
//!   carries geometric invariants of its own.
//!
//! Everything is synchronous and allocation-light; no query caches state.

pub mod cfg;
pub mod convert;
pub mod polygon;
pub mod shapes;
pub mod vect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use polygon::{moment_of_inertia, Interval, Polygon, PolygonError};
pub use vect::{Real, Vect};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::polygon::{
        centroid, fan_triangles, intersects, moment_of_inertia, moment_of_inertia_with,
        polygon_area, separating_axis, FanTriangle, Interval, MassCfg, Polygon, PolygonError,
    };
    pub use crate::shapes::{circle, iso_triangle, square, triangle};
    pub use crate::vect::{Real, Vect};
}
