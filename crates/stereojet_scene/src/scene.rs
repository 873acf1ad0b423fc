//! The stereo flight scene
//!
//! Owns every model (terrain sections, sun disc, jet body, control-surface
//! wedge) and turns the per-frame state into one draw list per eye.

use log::info;
use rand::Rng;
use stereojet_geometry::{
    DrawableGeometry, Fan, FanParams, GeometryError, Model, Solid, TerrainParams, TerrainPatch,
};
use stereojet_math::{transform, vector, MathError, Matrix};

use crate::camera::{Eye, StereoCamera};
use crate::controls::ControlState;
use crate::flight::FlightState;
use crate::frame::{DrawCall, DrawMode, EyePass, FrameOutput, ModelId, NO_SHIFT, SOLID_SHIFT};
use crate::jet::{JetPose, WORLD_SCALE};
use crate::renderer::StereoRenderer;
use crate::sun::Sun;
use crate::terrain_strip::TerrainStrip;

/// Construction parameters for a [`Scene`]
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSettings {
    /// Shape of every terrain section
    pub terrain: TerrainParams,
    pub section_count: usize,
    /// Length of one section along Y, in model units
    pub section_length: f32,
    pub sun_disc: FanParams,
    pub sun: Sun,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            terrain: TerrainParams::new(0.1, 2.0, 25, 25),
            section_count: 4,
            section_length: 2.0,
            sun_disc: FanParams::sun(),
            sun: Sun::default(),
        }
    }
}

/// All models plus the placement state shared by both eyes
pub struct Scene {
    models: Vec<Model>,
    strip: TerrainStrip,
    sun: Sun,
    sun_disc: ModelId,
    jet_body: ModelId,
    jet_flap: ModelId,
}

impl Scene {
    /// Build with fresh thread-local randomness
    pub fn build(settings: &SceneSettings) -> Result<Self, GeometryError> {
        Self::build_with(settings, &mut rand::rng())
    }

    /// Build drawing terrain randomness from `rng`
    pub fn build_with<R: Rng + ?Sized>(settings: &SceneSettings, rng: &mut R) -> Result<Self, GeometryError> {
        let mut models = Vec::with_capacity(settings.section_count + 3);
        let mut add = |model: Model| {
            models.push(model);
            ModelId(models.len() - 1)
        };

        let mut sections = Vec::with_capacity(settings.section_count);
        for _ in 0..settings.section_count {
            sections.push(add(TerrainPatch::generate_with(&settings.terrain, rng)?.into()));
        }
        let sun_disc = add(Fan::new(&settings.sun_disc)?.into());
        let jet_body = add(Solid::jet_body()?.into());
        let jet_flap = add(Solid::jet_flap()?.into());

        info!(
            "Built scene: {} models ({} terrain sections)",
            models.len(),
            sections.len()
        );

        Ok(Self {
            models,
            strip: TerrainStrip::new(sections, settings.section_length),
            sun: settings.sun,
            sun_disc,
            jet_body,
            jet_flap,
        })
    }

    /// Look up a model by handle
    pub fn model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id.0)
    }

    /// Every model with its handle
    pub fn models(&self) -> impl Iterator<Item = (ModelId, &Model)> {
        self.models.iter().enumerate().map(|(i, m)| (ModelId(i), m))
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn strip(&self) -> &TerrainStrip {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut TerrainStrip {
        &mut self.strip
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    /// Hand every model to the renderer once
    pub fn upload_all<R: StereoRenderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        for (id, model) in self.models() {
            renderer.upload(id, model)?;
        }
        Ok(())
    }

    /// Compose both eye passes for the current state
    pub fn compose(
        &self,
        camera: &StereoCamera,
        flight: &FlightState,
        controls: &ControlState,
        aspect_ratio: f32,
    ) -> Result<FrameOutput, MathError> {
        Ok(FrameOutput {
            projection: camera.projection(aspect_ratio),
            left: self.compose_eye(Eye::Left, camera, flight, controls)?,
            right: self.compose_eye(Eye::Right, camera, flight, controls)?,
        })
    }

    fn compose_eye(
        &self,
        eye: Eye,
        camera: &StereoCamera,
        flight: &FlightState,
        controls: &ControlState,
    ) -> Result<EyePass, MathError> {
        let eye_position = camera.eye_position(eye, flight.position, controls.ipd)?;
        let view = camera.view(eye_position, flight.position)?;
        let world = view.mul(&transform(None, Some([WORLD_SCALE; 3]), None))?;

        let mut draws = Vec::with_capacity(8 + self.strip.sections().len() * 2);

        // Jet: body, then each control surface
        let jet = JetPose::compose(&view, flight, controls)?;
        draws.push(solid_draw(self.jet_body, jet.body, NO_SHIFT));
        for (_, model_view) in jet.surfaces {
            draws.push(solid_draw(self.jet_flap, model_view, NO_SHIFT));
        }

        // Terrain: filled with a dimmed tint, then wireframe on top
        for slot in self.strip.slots() {
            let id = self.strip.sections()[slot.section];
            let model_view = world.mul(&TerrainStrip::slot_transform(&slot))?;
            let wireframe = self.model(id).is_some_and(|m| m.supports_wireframe());
            if wireframe {
                draws.push(solid_draw(id, model_view.clone(), SOLID_SHIFT));
                draws.push(DrawCall {
                    model: id,
                    model_view,
                    color_shift: NO_SHIFT,
                    mode: DrawMode::Lines,
                });
            } else {
                draws.push(solid_draw(id, model_view, SOLID_SHIFT));
            }
        }

        draws.push(solid_draw(self.sun_disc, world.mul(&self.sun.model_matrix())?, NO_SHIFT));

        Ok(EyePass {
            eye,
            eye_position,
            light_dir: self.sun.light_direction()?,
            camera_dir: vector::to_array(&vector::normalize(&eye_position))?,
            sun_color: controls.sun_color,
            draws,
        })
    }
}

fn solid_draw(model: ModelId, model_view: Matrix, color_shift: [f32; 3]) -> DrawCall {
    DrawCall {
        model,
        model_view,
        color_shift,
        mode: DrawMode::Triangles,
    }
}
