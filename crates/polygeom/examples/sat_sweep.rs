//! Slide a spinning triangle across a square and print SAT results per step.
//!
//! Usage:
//!   cargo run -p polygeom --example sat_sweep -- [steps]

use polygeom::prelude::*;

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);

    let block = Polygon::with_position(square(2.0, 2.0), Vect::new(-1.0, -1.0)).unwrap();
    let mut mover = Polygon::new(triangle(1.0)).unwrap();
    for i in 0..=steps {
        let t = i as Real / steps.max(1) as Real;
        mover.position = Vect::lerp(Vect::new(-4.0, -0.5), Vect::new(3.0, -0.5), t);
        mover.rotation = t * std::f32::consts::TAU;
        match separating_axis(&block, &mover) {
            Some(axis) => println!("step {i:>3}: separated along {axis}"),
            None => println!("step {i:>3}: overlapping"),
        }
    }
}
