//! Jet placement: body attitude and the six control surfaces
//!
//! Every control surface is an instance of the wedge solid, positioned
//! relative to the rotated body and deflected by the UI controls.

use stereojet_math::{transform, Affine, MathError, Matrix};

use crate::controls::ControlState;
use crate::flight::FlightState;

/// Uniform scale from model units to world units
pub const WORLD_SCALE: f32 = 5.0;

/// One wedge instance on the airframe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlSurface {
    LeftFlap,
    RightFlap,
    LeftVerticalStabilizer,
    RightVerticalStabilizer,
    LeftHorizontalStabilizer,
    RightHorizontalStabilizer,
}

impl ControlSurface {
    /// Draw order
    pub const ALL: [ControlSurface; 6] = [
        ControlSurface::LeftFlap,
        ControlSurface::RightFlap,
        ControlSurface::LeftVerticalStabilizer,
        ControlSurface::RightVerticalStabilizer,
        ControlSurface::LeftHorizontalStabilizer,
        ControlSurface::RightHorizontalStabilizer,
    ];

    /// Mount point, scale and deflection relative to the jet body
    pub fn affine(self, controls: &ControlState) -> Affine {
        let flaps = controls.wing_flaps;
        let vertical = controls.vertical_stabilizers;
        let horizontal = controls.horizontal_stabilizers;

        let (translate, scale, rotate) = match self {
            ControlSurface::LeftFlap => ([-0.085, -0.0025, 0.0], [1.0, -2.0, 2.0], [-90.0, 0.0, -flaps]),
            ControlSurface::RightFlap => ([0.085, -0.0025, 0.0], [1.0, -2.0, 2.0], [90.0, 0.0, flaps]),
            ControlSurface::LeftVerticalStabilizer => {
                ([-0.05, -0.2, 0.0], [1.0, 1.5, 1.75], [-15.0 + vertical, 0.0, 0.0])
            }
            ControlSurface::RightVerticalStabilizer => {
                ([0.05, -0.2, 0.0], [1.0, 1.5, 1.75], [15.0 + vertical, 0.0, 0.0])
            }
            ControlSurface::LeftHorizontalStabilizer => {
                ([-0.07, -0.18, 0.0], [1.0, -1.5, 1.5], [-90.0, 0.0, -horizontal])
            }
            ControlSurface::RightHorizontalStabilizer => {
                ([0.07, -0.18, 0.0], [1.0, -1.5, -1.5], [-90.0, 0.0, horizontal])
            }
        };

        Affine::default().translate(translate).scale(scale).rotate(rotate)
    }
}

/// Model-view matrices for the jet under one eye's view
#[derive(Clone, Debug)]
pub struct JetPose {
    /// Body with attitude applied
    pub body: Matrix,
    /// One per [`ControlSurface::ALL`] entry
    pub surfaces: Vec<(ControlSurface, Matrix)>,
}

impl JetPose {
    /// Compose the jet under `view`
    pub fn compose(view: &Matrix, flight: &FlightState, controls: &ControlState) -> Result<Self, MathError> {
        let placement = transform(Some(flight.position), Some([WORLD_SCALE; 3]), None);
        let base = view.mul(&placement)?;

        let attitude = flight.attitude();
        let offsets = controls.body_offsets();
        let rotate = std::array::from_fn(|i| attitude[i] + offsets[i]);
        let body = base.mul(&transform(None, None, Some(rotate)))?;

        let surfaces = ControlSurface::ALL
            .iter()
            .map(|&surface| -> Result<_, MathError> {
                Ok((surface, body.mul(&surface.affine(controls).to_matrix())?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { body, surfaces })
    }
}
