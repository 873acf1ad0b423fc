//! Procedural meshes for stereojet
//!
//! Every generator produces an immutable [`Mesh`] (flat positions, colours,
//! triangle indices and, for lit models, normals) exposed through the
//! [`DrawableGeometry`] capability.
//!
//! ## Generators
//!
//! - [`TerrainPatch`] - randomized height-field with a central trough
//! - [`Fan`] - radial triangle fan, used for the sun disc
//! - [`Solid`] - hand-authored jet body and control-surface wedge
//!
//! [`Model`] is the closed set of these the scene stores.

pub mod color;
mod error;
pub mod fan;
pub mod index;
mod mesh;
mod model;
pub mod solids;
pub mod terrain;

pub use error::GeometryError;
pub use fan::{Fan, FanParams};
pub use index::{concat_indices, IndexFormat};
pub use mesh::{DrawableGeometry, Mesh};
pub use model::Model;
pub use solids::{Solid, SolidKind};
pub use terrain::{TerrainParams, TerrainPatch};

// Re-export the random source trait so callers can inject seeded generators
pub use rand::Rng;
