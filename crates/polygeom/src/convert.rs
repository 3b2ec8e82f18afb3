//! Explicit conversions between `Vect` and host vector types.
//!
//! Widening conversions fill missing components with zero; narrowing ones drop
//! them. There are no implicit coercions anywhere in the kernel.

use nalgebra::{Point2, Vector2, Vector3, Vector4};

use crate::vect::{Real, Vect};

impl From<Vector4<Real>> for Vect {
    #[inline]
    fn from(v: Vector4<Real>) -> Self {
        Vect::from_vector(v)
    }
}

impl From<Vect> for Vector4<Real> {
    #[inline]
    fn from(v: Vect) -> Self {
        *v.as_vector()
    }
}

impl From<Vector3<Real>> for Vect {
    #[inline]
    fn from(v: Vector3<Real>) -> Self {
        Vect::new3(v.x, v.y, v.z)
    }
}

impl From<Vect> for Vector3<Real> {
    #[inline]
    fn from(v: Vect) -> Self {
        Vector3::new(v.x(), v.y(), v.z())
    }
}

impl From<Vector2<Real>> for Vect {
    #[inline]
    fn from(v: Vector2<Real>) -> Self {
        Vect::new(v.x, v.y)
    }
}

impl From<Vect> for Vector2<Real> {
    #[inline]
    fn from(v: Vect) -> Self {
        Vector2::new(v.x(), v.y())
    }
}

impl From<Point2<Real>> for Vect {
    #[inline]
    fn from(p: Point2<Real>) -> Self {
        Vect::new(p.x, p.y)
    }
}

impl From<Vect> for Point2<Real> {
    #[inline]
    fn from(v: Vect) -> Self {
        Point2::new(v.x(), v.y())
    }
}

impl From<(Real, Real)> for Vect {
    #[inline]
    fn from((x, y): (Real, Real)) -> Self {
        Vect::new(x, y)
    }
}

impl From<(Real, Real, Real)> for Vect {
    #[inline]
    fn from((x, y, z): (Real, Real, Real)) -> Self {
        Vect::new3(x, y, z)
    }
}

impl From<Vect> for (Real, Real) {
    #[inline]
    fn from(v: Vect) -> Self {
        (v.x(), v.y())
    }
}

impl From<[Real; 2]> for Vect {
    #[inline]
    fn from([x, y]: [Real; 2]) -> Self {
        Vect::new(x, y)
    }
}

impl From<Vect> for [Real; 2] {
    #[inline]
    fn from(v: Vect) -> Self {
        [v.x(), v.y()]
    }
}
