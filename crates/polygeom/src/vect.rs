//! Four-component value vector used throughout the kernel.
//!
//! Purpose
//! - One immutable value type for points, offsets, axes and normals. The planar
//!   code only populates `x`/`y`; `z`/`w` default to zero and ride along.
//!
//! Conventions
//! - Equality is exact component-wise float equality. No epsilon.
//! - Size comparisons go by squared magnitude and live in named methods
//!   (`is_shorter_than`, `is_longer_than`, `cmp_magnitude`). They are not
//!   `PartialOrd`: two distinct vectors of equal length compare "equal" by size.
//! - `normalize` never fails; the zero vector maps to itself.
//!
//! References
//! - Code cross-refs: `polygon::Polygon`, `convert` (nalgebra/tuple adapters)

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector4;

use crate::cfg::CACHED_MAGNITUDE_REL_TOL;

/// Single-precision scalar used for vertex coordinates and angles.
pub type Real = f32;

/// Immutable 4-component vector with an optional magnitude hint.
///
/// Invariant: when `cached_magnitude` is `Some(m)`, `m` equals the computed
/// `sqrt(x² + y² + z² + w²)` up to rounding. Arithmetic results never carry a
/// hint forward except where the magnitude is unchanged (negation).
#[derive(Clone, Copy, Debug)]
pub struct Vect {
    v: Vector4<Real>,
    cached_magnitude: Option<Real>,
}

impl Vect {
    /// Planar vector `(x, y, 0, 0)`.
    #[inline]
    pub fn new(x: Real, y: Real) -> Self {
        Self::new4(x, y, 0.0, 0.0)
    }

    #[inline]
    pub fn new3(x: Real, y: Real, z: Real) -> Self {
        Self::new4(x, y, z, 0.0)
    }

    #[inline]
    pub fn new4(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self::from_vector(Vector4::new(x, y, z, w))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_vector(Vector4::zeros())
    }

    /// Construct with a pre-computed magnitude.
    ///
    /// The hint is kept only if it agrees with the computed magnitude; a
    /// disagreeing (or non-finite) hint is dropped and the magnitude is
    /// computed on demand instead.
    pub fn with_cached_magnitude(x: Real, y: Real, z: Real, w: Real, magnitude: Real) -> Self {
        let v = Vector4::new(x, y, z, w);
        let computed = v.norm();
        let agrees = (computed - magnitude).abs() <= CACHED_MAGNITUDE_REL_TOL * computed.max(1.0);
        if !agrees {
            tracing::debug!(magnitude, computed, "dropping inconsistent magnitude hint");
        }
        Self {
            v,
            cached_magnitude: agrees.then_some(magnitude),
        }
    }

    #[inline]
    pub(crate) fn from_vector(v: Vector4<Real>) -> Self {
        Self {
            v,
            cached_magnitude: None,
        }
    }

    #[inline]
    pub fn x(&self) -> Real {
        self.v.x
    }
    #[inline]
    pub fn y(&self) -> Real {
        self.v.y
    }
    #[inline]
    pub fn z(&self) -> Real {
        self.v.z
    }
    #[inline]
    pub fn w(&self) -> Real {
        self.v.w
    }

    /// The magnitude hint supplied at construction, if any.
    #[inline]
    pub fn cached_magnitude(&self) -> Option<Real> {
        self.cached_magnitude
    }

    #[inline]
    pub fn magnitude_squared(&self) -> Real {
        self.v.norm_squared()
    }

    /// Cached hint if present, else `sqrt(magnitude_squared())`.
    #[inline]
    pub fn magnitude(&self) -> Real {
        match self.cached_magnitude {
            Some(m) => m,
            None => self.magnitude_squared().sqrt(),
        }
    }

    /// Unit vector in the same direction; the zero vector is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return self;
        }
        self / mag
    }

    /// Rescale to length `magnitude`; the zero vector is returned unchanged.
    #[inline]
    pub fn with_magnitude(self, magnitude: Real) -> Self {
        let current = self.magnitude();
        if current == 0.0 {
            return self;
        }
        self * (magnitude / current)
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(self, rhs: Self) -> Real {
        self.v.dot(&rhs.v)
    }

    /// Cross product of the xyz parts; `w` of the result is zero.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let (a, b) = (self.v, rhs.v);
        Self::new3(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Left perpendicular in the xy-plane: `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.v.y, self.v.x)
    }

    /// `a + (b - a) * t`, unclamped.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: Real) -> Self {
        a + (b - a) * t
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> Real {
        (self - rhs).magnitude()
    }

    #[inline]
    pub fn distance_squared(self, rhs: Self) -> Real {
        (self.v - rhs.v).norm_squared()
    }

    /// `|self|² < |rhs|²`.
    #[inline]
    pub fn is_shorter_than(&self, rhs: &Self) -> bool {
        self.magnitude_squared() < rhs.magnitude_squared()
    }

    /// `|self|² > |rhs|²`.
    #[inline]
    pub fn is_longer_than(&self, rhs: &Self) -> bool {
        self.magnitude_squared() > rhs.magnitude_squared()
    }

    /// Compare by squared magnitude. `None` if either side is NaN.
    #[inline]
    pub fn cmp_magnitude(&self, rhs: &Self) -> Option<Ordering> {
        self.magnitude_squared()
            .partial_cmp(&rhs.magnitude_squared())
    }

    #[inline]
    pub(crate) fn as_vector(&self) -> &Vector4<Real> {
        &self.v
    }
}

impl Default for Vect {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Vect {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl fmt::Display for Vect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}, {:.6}, {:.6})",
            self.v.x, self.v.y, self.v.z, self.v.w
        )
    }
}

impl Add for Vect {
    type Output = Vect;
    #[inline]
    fn add(self, rhs: Vect) -> Self::Output {
        Vect::from_vector(self.v + rhs.v)
    }
}

impl Sub for Vect {
    type Output = Vect;
    #[inline]
    fn sub(self, rhs: Vect) -> Self::Output {
        Vect::from_vector(self.v - rhs.v)
    }
}

impl Neg for Vect {
    type Output = Vect;
    #[inline]
    fn neg(self) -> Self::Output {
        Vect {
            v: -self.v,
            cached_magnitude: self.cached_magnitude,
        }
    }
}

impl Mul<Real> for Vect {
    type Output = Vect;
    #[inline]
    fn mul(self, rhs: Real) -> Self::Output {
        Vect::from_vector(self.v * rhs)
    }
}

impl Mul<Vect> for Real {
    type Output = Vect;
    #[inline]
    fn mul(self, rhs: Vect) -> Self::Output {
        rhs * self
    }
}

/// Component-wise product.
impl Mul for Vect {
    type Output = Vect;
    #[inline]
    fn mul(self, rhs: Vect) -> Self::Output {
        Vect::from_vector(self.v.component_mul(&rhs.v))
    }
}

impl Div<Real> for Vect {
    type Output = Vect;
    #[inline]
    fn div(self, rhs: Real) -> Self::Output {
        let inv = 1.0 / rhs;
        Vect::from_vector(self.v * inv)
    }
}

/// Component-wise quotient.
impl Div for Vect {
    type Output = Vect;
    #[inline]
    fn div(self, rhs: Vect) -> Self::Output {
        Vect::from_vector(self.v.component_div(&rhs.v))
    }
}

/// `(s / x, s / y, s / z, s / w)`.
impl Div<Vect> for Real {
    type Output = Vect;
    #[inline]
    fn div(self, rhs: Vect) -> Self::Output {
        Vect::from_vector(rhs.v.map(|c| self / c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vect::new4(1.0, 2.0, 3.0, 4.0);
        let b = Vect::new4(0.5, -1.0, 2.0, 0.0);
        assert_eq!(a + b, Vect::new4(1.5, 1.0, 5.0, 4.0));
        assert_eq!(a - b, Vect::new4(0.5, 3.0, 1.0, 4.0));
        assert_eq!(-a, Vect::new4(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a * 2.0, Vect::new4(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * b, Vect::new4(0.5, -2.0, 6.0, 0.0));
        assert_eq!(a / 2.0, Vect::new4(0.5, 1.0, 1.5, 2.0));
        assert_eq!(
            Vect::new(4.0, 9.0) / Vect::new4(2.0, 3.0, 1.0, 1.0),
            Vect::new(2.0, 3.0)
        );
        assert_eq!(8.0 / Vect::new4(2.0, 4.0, 8.0, 1.0), Vect::new4(4.0, 2.0, 1.0, 8.0));
    }

    #[test]
    fn dot_and_cross() {
        let x = Vect::new3(1.0, 0.0, 0.0);
        let y = Vect::new3(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vect::new3(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vect::new3(0.0, 0.0, -1.0));
        let a = Vect::new4(1.0, 2.0, 3.0, 9.0);
        let b = Vect::new4(4.0, 5.0, 6.0, 9.0);
        // w never enters the cross product and comes out zero
        assert_eq!(a.cross(b), Vect::new4(-3.0, 6.0, -3.0, 0.0));
        assert_eq!(a.dot(b), 4.0 + 10.0 + 18.0 + 81.0);
    }

    #[test]
    fn magnitude_and_distance() {
        let v = Vect::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(Vect::new(1.0, 1.0).distance(Vect::new(4.0, 5.0)), 5.0);
        assert_eq!(Vect::new(1.0, 1.0).distance_squared(Vect::new(4.0, 5.0)), 25.0);
    }

    #[test]
    fn normalize_zero_is_identity() {
        let z = Vect::zero();
        assert_eq!(z.normalize(), z);
        assert_eq!(z.with_magnitude(3.0), z);
        assert_eq!(Vect::default(), z);
    }

    #[test]
    fn with_magnitude_rescales() {
        let v = Vect::new(3.0, 4.0).with_magnitude(10.0);
        assert!((v.x() - 6.0).abs() < 1e-5);
        assert!((v.y() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Vect::new(0.0, 0.0);
        let b = Vect::new(2.0, 4.0);
        assert_eq!(Vect::lerp(a, b, 0.5), Vect::new(1.0, 2.0));
        assert_eq!(Vect::lerp(a, b, 2.0), Vect::new(4.0, 8.0));
        assert_eq!(Vect::lerp(a, b, -1.0), Vect::new(-2.0, -4.0));
    }

    #[test]
    fn size_comparison_uses_squared_magnitude() {
        let a = Vect::new(1.0, 0.0);
        let b = Vect::new(0.0, 1.0);
        let c = Vect::new(0.0, -2.0);
        assert!(!a.is_shorter_than(&b) && !a.is_longer_than(&b));
        assert_eq!(a.cmp_magnitude(&b), Some(Ordering::Equal));
        assert_ne!(a, b);
        assert!(a.is_shorter_than(&c));
        assert!(c.is_longer_than(&a));
        let nan = Vect::new(Real::NAN, 0.0);
        assert_eq!(a.cmp_magnitude(&nan), None);
    }

    #[test]
    fn equality_ignores_magnitude_hint() {
        let hinted = Vect::with_cached_magnitude(3.0, 4.0, 0.0, 0.0, 5.0);
        assert_eq!(hinted, Vect::new(3.0, 4.0));
        assert_eq!(hinted.cached_magnitude(), Some(5.0));
        assert_eq!((-hinted).cached_magnitude(), Some(5.0));
        assert_eq!((hinted * 2.0).cached_magnitude(), None);
    }

    #[test]
    fn wrong_magnitude_hint_is_dropped() {
        for &bad in &[4.0, 0.0, -5.0, Real::NAN, Real::INFINITY] {
            let v = Vect::with_cached_magnitude(3.0, 4.0, 0.0, 0.0, bad);
            assert_eq!(v.cached_magnitude(), None, "hint {bad}");
            assert_eq!(v.magnitude(), 5.0);
            assert!(v.normalize().distance(Vect::new(0.6, 0.8)) < 1e-6);
        }
    }

    #[test]
    fn display_six_decimals() {
        assert_eq!(
            Vect::new(1.0, -0.5).to_string(),
            "(1.000000, -0.500000, 0.000000, 0.000000)"
        );
    }

    proptest! {
        #[test]
        fn normalize_yields_unit_length(
            x in -1.0e3f32..1.0e3,
            y in -1.0e3f32..1.0e3,
            z in -1.0e3f32..1.0e3,
            w in -1.0e3f32..1.0e3,
        ) {
            let v = Vect::new4(x, y, z, w);
            prop_assume!(v.magnitude_squared() > 1e-6);
            prop_assert!((v.normalize().magnitude() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn cached_magnitude_agrees_with_computed(
            x in -1.0e3f32..1.0e3,
            y in -1.0e3f32..1.0e3,
            z in -1.0e3f32..1.0e3,
            w in -1.0e3f32..1.0e3,
        ) {
            let exact = [x, y, z, w]
                .iter()
                .map(|&c| (c as f64) * (c as f64))
                .sum::<f64>()
                .sqrt() as Real;
            let hinted = Vect::with_cached_magnitude(x, y, z, w, exact);
            let computed = Vect::new4(x, y, z, w).magnitude();
            prop_assert_eq!(hinted.cached_magnitude(), Some(exact));
            prop_assert!((hinted.magnitude() - computed).abs() <= 1e-5 * computed.max(1.0));
        }

        #[test]
        fn magnitude_ignores_off_hint(
            x in -1.0e3f32..1.0e3,
            y in -1.0e3f32..1.0e3,
            scale in 1.5f32..100.0,
        ) {
            let computed = Vect::new(x, y).magnitude();
            prop_assume!(computed > 1e-3);
            let hinted = Vect::with_cached_magnitude(x, y, 0.0, 0.0, computed * scale);
            prop_assert_eq!(hinted.cached_magnitude(), None);
            prop_assert_eq!(hinted.magnitude(), computed);
        }

        #[test]
        fn lerp_hits_endpoints(
            ax in -1.0e3f32..1.0e3, ay in -1.0e3f32..1.0e3,
            bx in -1.0e3f32..1.0e3, by in -1.0e3f32..1.0e3,
        ) {
            let a = Vect::new(ax, ay);
            let b = Vect::new(bx, by);
            prop_assert_eq!(Vect::lerp(a, b, 0.0), a);
            prop_assert!(Vect::lerp(a, b, 1.0).distance(b) < 1e-3);
        }
    }
}
