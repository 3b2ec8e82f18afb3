mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polygeom::cfg::DEFAULT_CIRCLE_SIDES;
use polygeom::polygon::{moment_of_inertia, polygon_area, separating_axis};
use polygeom::{shapes, Real, Vect};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use input::PolygonSpec;

#[derive(Parser)]
#[command(name = "polygeom")]
#[command(about = "Polygon geometry and mass-property queries")]
struct Cmd {
    /// Log at debug level (logs go to stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Centroid, radius, world vertices and SAT axes of a polygon file
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
    /// Area and moment of inertia about the vertex centroid
    Inertia {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        mass: f64,
    },
    /// Projection interval of the posed polygon along an axis `x,y`
    Project {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        axis: String,
    },
    /// Separating-axis test between two polygon files
    Sat {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
    },
    /// Emit a polygon file for a built-in shape
    Shape {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(subcommand)]
        kind: ShapeKind,
    },
}

#[derive(Subcommand)]
enum ShapeKind {
    Square {
        #[arg(long)]
        width: Real,
        #[arg(long)]
        height: Real,
    },
    Triangle {
        #[arg(long)]
        side: Real,
    },
    IsoTriangle {
        #[arg(long)]
        width: Real,
        #[arg(long)]
        height: Real,
    },
    Circle {
        #[arg(long)]
        radius: Real,
        #[arg(long, default_value_t = DEFAULT_CIRCLE_SIDES)]
        sides: usize,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let out = match cmd.action {
        Action::Inspect { input } => inspect(&input::load(&input)?)?,
        Action::Inertia { input, mass } => inertia(&input::load(&input)?, mass)
            .with_context(|| format!("inertia of {}", input.display()))?,
        Action::Project { input, axis } => project(&input::load(&input)?, &axis)?,
        Action::Sat { a, b } => sat(&input::load(&a)?, &input::load(&b)?)?,
        Action::Shape { out, kind } => {
            let spec = shape(kind);
            if let Some(path) = out {
                input::save(&path, &spec)?;
                tracing::info!(path = %path.display(), "wrote shape");
                return Ok(());
            }
            serde_json::to_value(&spec)?
        }
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn xy(v: Vect) -> [Real; 2] {
    v.into()
}

fn inspect(spec: &PolygonSpec) -> Result<Value> {
    let poly = spec.to_polygon()?;
    tracing::info!(vertices = poly.vertex_count(), rotation = poly.rotation, "inspect");
    Ok(json!({
        "centroid": xy(poly.centroid()),
        "radius": poly.radius(),
        "transformed_vertices": poly.transformed_vertices().into_iter().map(xy).collect::<Vec<_>>(),
        "axes": poly.axes().into_iter().map(xy).collect::<Vec<_>>(),
    }))
}

fn inertia(spec: &PolygonSpec, mass: f64) -> Result<Value> {
    let vertices = spec.local_vertices();
    let area = polygon_area(&vertices)?;
    let moment = moment_of_inertia(&vertices, mass)?;
    tracing::info!(mass, area, moment, "inertia");
    Ok(json!({
        "vertices": vertices.len(),
        "mass": mass,
        "area": area,
        "moment_of_inertia": moment,
    }))
}

fn project(spec: &PolygonSpec, axis: &str) -> Result<Value> {
    let poly = spec.to_polygon()?;
    let axis = input::parse_axis(axis)?;
    let interval = poly.project(axis);
    Ok(json!({ "axis": xy(axis), "min": interval.min, "max": interval.max }))
}

fn sat(a: &PolygonSpec, b: &PolygonSpec) -> Result<Value> {
    let (pa, pb) = (a.to_polygon()?, b.to_polygon()?);
    let axis = separating_axis(&pa, &pb);
    tracing::info!(separated = axis.is_some(), "sat");
    Ok(json!({
        "intersects": axis.is_none(),
        "separating_axis": axis.map(xy),
    }))
}

fn shape(kind: ShapeKind) -> PolygonSpec {
    let vertices = match kind {
        ShapeKind::Square { width, height } => shapes::square(width, height),
        ShapeKind::Triangle { side } => shapes::triangle(side),
        ShapeKind::IsoTriangle { width, height } => shapes::iso_triangle(width, height),
        ShapeKind::Circle { radius, sides } => shapes::circle(radius, sides),
    };
    PolygonSpec::from_vertices(&vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_spec(side: Real, at: [Real; 2]) -> PolygonSpec {
        let mut spec = PolygonSpec::from_vertices(&shapes::square(side, side));
        spec.position = at;
        spec
    }

    #[test]
    fn cli_parses_nested_shape() {
        let cmd = Cmd::try_parse_from(["polygeom", "shape", "circle", "--radius", "2"]).unwrap();
        match cmd.action {
            Action::Shape {
                out: None,
                kind: ShapeKind::Circle { radius, sides },
            } => {
                assert_eq!(radius, 2.0);
                assert_eq!(sides, DEFAULT_CIRCLE_SIDES);
            }
            _ => panic!("unexpected parse"),
        }
    }

    #[test]
    fn cli_accepts_negative_axis() {
        let cmd =
            Cmd::try_parse_from(["polygeom", "project", "--input", "p.json", "--axis", "-1,0"])
                .unwrap();
        assert!(matches!(cmd.action, Action::Project { ref axis, .. } if axis == "-1,0"));
    }

    #[test]
    fn negative_mass_reaches_the_kernel() {
        let cmd = Cmd::try_parse_from(["polygeom", "inertia", "--input", "p.json", "--mass", "-1"])
            .unwrap();
        let Action::Inertia { mass, .. } = cmd.action else {
            panic!("unexpected parse");
        };
        assert_eq!(mass, -1.0);
        let err = inertia(&square_spec(1.0, [0.0, 0.0]), mass).unwrap_err();
        assert!(err.to_string().contains("mass must be positive"));
    }

    #[test]
    fn inertia_of_unit_square() {
        let out = inertia(&square_spec(1.0, [0.0, 0.0]), 6.0).unwrap();
        assert_eq!(out["area"], 1.0);
        let moment = out["moment_of_inertia"].as_f64().unwrap();
        assert!((moment - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inertia_rejects_zero_mass() {
        let err = inertia(&square_spec(1.0, [0.0, 0.0]), 0.0).unwrap_err();
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn project_uses_pose() {
        let out = project(&square_spec(2.0, [1.0, 0.0]), "1,0").unwrap();
        assert_eq!(out["min"], 1.0);
        assert_eq!(out["max"], 3.0);
    }

    #[test]
    fn sat_reports_separation() {
        let a = square_spec(1.0, [0.0, 0.0]);
        let b = square_spec(1.0, [5.0, 0.0]);
        let out = sat(&a, &b).unwrap();
        assert_eq!(out["intersects"], false);
        assert!(out["separating_axis"].is_array());
        let out = sat(&a, &a).unwrap();
        assert_eq!(out["intersects"], true);
        assert!(out["separating_axis"].is_null());
    }

    #[test]
    fn inspect_lists_one_axis_per_edge() {
        let out = inspect(&square_spec(1.0, [0.0, 0.0])).unwrap();
        assert_eq!(out["axes"].as_array().unwrap().len(), 4);
        assert_eq!(out["centroid"], json!([0.5, 0.5]));
    }

    #[test]
    fn shape_builds_spec() {
        let spec = shape(ShapeKind::Triangle { side: 2.0 });
        assert_eq!(spec.vertices, vec![[1.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
    }
}
