//! The closed set of drawable models the scene stores

use crate::{DrawableGeometry, Fan, Mesh, Solid, TerrainPatch};

/// A drawable model: one of the generator outputs
#[derive(Clone, Debug)]
pub enum Model {
    Terrain(TerrainPatch),
    Fan(Fan),
    Solid(Solid),
}

impl Model {
    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Model::Terrain(_) => "terrain",
            Model::Fan(_) => "fan",
            Model::Solid(_) => "solid",
        }
    }
}

impl DrawableGeometry for Model {
    fn mesh(&self) -> &Mesh {
        match self {
            Model::Terrain(t) => t.mesh(),
            Model::Fan(f) => f.mesh(),
            Model::Solid(s) => s.mesh(),
        }
    }

    fn supports_wireframe(&self) -> bool {
        match self {
            Model::Terrain(t) => t.supports_wireframe(),
            Model::Fan(f) => f.supports_wireframe(),
            Model::Solid(s) => s.supports_wireframe(),
        }
    }
}

impl From<TerrainPatch> for Model {
    fn from(patch: TerrainPatch) -> Self {
        Model::Terrain(patch)
    }
}

impl From<Fan> for Model {
    fn from(fan: Fan) -> Self {
        Model::Fan(fan)
    }
}

impl From<Solid> for Model {
    fn from(solid: Solid) -> Self {
        Model::Solid(solid)
    }
}
