use anyhow::{anyhow, Context, Result};
use polygeom::{Polygon, Real, Vect};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk polygon description: local vertices plus an optional pose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonSpec {
    pub vertices: Vec<[Real; 2]>,
    #[serde(default)]
    pub position: [Real; 2],
    #[serde(default)]
    pub rotation: Real,
}

impl PolygonSpec {
    pub fn from_vertices(vertices: &[Vect]) -> Self {
        Self {
            vertices: vertices.iter().map(|&v| v.into()).collect(),
            position: [0.0, 0.0],
            rotation: 0.0,
        }
    }

    pub fn local_vertices(&self) -> Vec<Vect> {
        self.vertices.iter().map(|&p| Vect::from(p)).collect()
    }

    pub fn to_polygon(&self) -> Result<Polygon> {
        let mut poly = Polygon::with_position(self.local_vertices(), self.position.into())?;
        poly.rotation = self.rotation;
        Ok(poly)
    }
}

pub fn load(path: &Path) -> Result<PolygonSpec> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let spec: PolygonSpec =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), vertices = spec.vertices.len(), "loaded polygon");
    Ok(spec)
}

pub fn save(path: &Path, spec: &PolygonSpec) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(spec)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Parse `"x,y"` into a planar vector.
pub fn parse_axis(s: &str) -> Result<Vect> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("axis must look like `x,y`, got `{s}`"))?;
    let x: Real = x.trim().parse().with_context(|| format!("axis x in `{s}`"))?;
    let y: Real = y.trim().parse().with_context(|| format!("axis y in `{s}`"))?;
    Ok(Vect::new(x, y))
}
