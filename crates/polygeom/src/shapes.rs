//! Vertex-ring builders: fixed shapes and a reproducible random convex sampler.
//!
//! Every builder returns a counter-clockwise ring (y-up) with at least three
//! vertices, ready for `Polygon::new`. No geometry checks happen here.
//!
//! Random model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and keep the convex hull of the resulting points.
//! - Determinism: each `(seed, index)` pair is mixed into its own RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vect::{Real, Vect};

/// Axis-aligned rectangle with a corner at the origin.
pub fn square(width: Real, height: Real) -> Vec<Vect> {
    vec![
        Vect::new(0.0, 0.0),
        Vect::new(width, 0.0),
        Vect::new(width, height),
        Vect::new(0.0, height),
    ]
}

/// Triangle with apex `(side/2, 0)` and base on `y = side`.
pub fn triangle(side: Real) -> Vec<Vect> {
    iso_triangle(side, side)
}

/// Isosceles triangle with apex `(width/2, 0)` and base on `y = height`.
pub fn iso_triangle(width: Real, height: Real) -> Vec<Vect> {
    vec![
        Vect::new(width / 2.0, 0.0),
        Vect::new(width, height),
        Vect::new(0.0, height),
    ]
}

/// Regular `sides`-gon inscribed in a circle of `radius` about the origin.
///
/// `sides` below 3 is raised to 3. See `cfg::DEFAULT_CIRCLE_SIDES`.
pub fn circle(radius: Real, sides: usize) -> Vec<Vect> {
    let sides = sides.max(3);
    (0..sides)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as Real / sides as Real;
            Vect::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

/// Reproducible random convex ring around the origin.
///
/// `n` base angles `2πk/n` get a shared random phase plus per-vertex angular
/// and radial jitter; the ring is the convex hull of those points. Draw
/// `index` of `seed` depends on nothing else, so one draw can be replayed alone.
#[derive(Clone, Copy, Debug)]
pub struct RingSampler {
    /// Inclusive vertex-count range before hulling. Raised to at least 3.
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Angular jitter as a fraction of the spacing `2π/n`, clamped to [0, 0.49].
    pub angle_jitter: Real,
    /// Radii fall in `radius · [1 - radial_jitter, 1 + radial_jitter]`, clamped to [0, 0.99].
    pub radial_jitter: Real,
    pub radius: Real,
}

impl Default for RingSampler {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            angle_jitter: 0.3,
            radial_jitter: 0.25,
            radius: 1.0,
        }
    }
}

impl RingSampler {
    /// Default jitter with exactly `n` base vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            min_vertices: n,
            max_vertices: n,
            ..Self::default()
        }
    }

    /// Returns `None` only if the hull collapses below three vertices.
    pub fn draw(&self, seed: u64, index: u64) -> Option<Vec<Vect>> {
        let mut rng = draw_rng(seed, index);
        let lo = self.min_vertices.max(3);
        let n = rng.gen_range(lo..=self.max_vertices.max(lo));
        let spacing = std::f32::consts::TAU / n as Real;
        let aj = self.angle_jitter.clamp(0.0, 0.49) * spacing;
        let rj = self.radial_jitter.clamp(0.0, 0.99);
        let phase = rng.gen_range(0.0..std::f32::consts::TAU);
        let points = (0..n)
            .map(|k| {
                let angle = phase + k as Real * spacing + rng.gen_range(-aj..=aj);
                let r = self.radius * (1.0 + rng.gen_range(-rj..=rj));
                Vect::new(angle.cos() * r, angle.sin() * r)
            })
            .collect();
        let hull = convex_hull(points);
        (hull.len() >= 3).then_some(hull)
    }
}

/// One RNG per `(seed, index)`, mixed with the SplitMix64 finalizer.
fn draw_rng(seed: u64, index: u64) -> StdRng {
    fn mix(mut x: u64) -> u64 {
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }
    StdRng::seed_from_u64(mix(seed ^ mix(index.wrapping_add(0x9e3779b97f4a7c15))))
}

#[inline]
fn turn(a: Vect, b: Vect, c: Vect) -> Real {
    (b - a).cross(c - a).z()
}

/// Andrew's monotone chain on the planar coordinates. CCW, collinear points dropped.
fn convex_hull(mut points: Vec<Vect>) -> Vec<Vect> {
    points.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
    points.dedup();
    if points.len() < 3 {
        return points;
    }
    let mut hull: Vec<Vect> = Vec::with_capacity(2 * points.len());
    for &p in &points {
        while hull.len() >= 2 && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    // Upper chain must not pop into the finished lower chain.
    let floor = hull.len() + 1;
    for &p in points.iter().rev().skip(1) {
        while hull.len() >= floor && turn(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}
