//! Tolerance defaults for polygon geometry.
//!
//! Policy
//! - Geometry queries use fixed constants; only the mass-property path takes a
//!   small config (`polygon::MassCfg`) because its tolerances are data-dependent.

use crate::vect::Real;

/// Axes with squared length below this project to the degenerate interval `(0, 0)`.
pub const AXIS_EPS_SQ: Real = 1e-4;

/// Side count used by `shapes::circle` callers that have no preference.
pub const DEFAULT_CIRCLE_SIDES: usize = 16;

/// Relative slack for accepting a `Vect::with_cached_magnitude` hint.
pub(crate) const CACHED_MAGNITUDE_REL_TOL: Real = 1e-4;
