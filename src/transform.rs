//! Rigid transforms over whole models.
//!
//! Every function here is pure: it takes a [`Model`] by reference and returns
//! a new one of equal length. A [`Pose`] bundles the per-frame parameters and
//! applies them in the fixed order Z, X, Y rotation followed by translation.

use std::f32::consts::PI;

use crate::math::vec3::Vec3;
use crate::model::Model;

/// Adds `delta` to every vertex position.
pub fn translate(model: &Model, delta: Vec3) -> Model {
    model.map_positions(|p| p + delta)
}

/// Rotates about the Z axis: `x' = x·cos − y·sin`, `y' = x·sin + y·cos`.
pub fn rotate_z(model: &Model, angle: f32) -> Model {
    model.map_positions(|p| p.rotate_z(angle))
}

/// Rotates about the X axis: `y' = y·cos − z·sin`, `z' = y·sin + z·cos`.
pub fn rotate_x(model: &Model, angle: f32) -> Model {
    model.map_positions(|p| p.rotate_x(angle))
}

/// Rotates about the Y axis: `x' = x·cos + z·sin`, `z' = −x·sin + z·cos`.
pub fn rotate_y(model: &Model, angle: f32) -> Model {
    model.map_positions(|p| p.rotate_y(angle))
}

/// Saturating angle clamp to `[−π, π]`.
///
/// Values past either bound snap to the opposite bound rather than wrapping
/// by a full turn, so an angle of `π + 0.3` becomes `−π`, not `−π + 0.3`.
pub fn clamp_angle(angle: f32) -> f32 {
    if angle > PI {
        -PI
    } else if angle < -PI {
        PI
    } else {
        angle
    }
}

/// Rotation angles (radians) and translation for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub angle_z: f32,
    pub angle_x: f32,
    pub angle_y: f32,
    pub translation: Vec3,
}

/// Angular velocity in radians per frame for each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub z: f32,
    pub x: f32,
    pub y: f32,
}

impl Pose {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// Poses `model`: rotate Z, then X, then Y, then translate.
    pub fn apply(&self, model: &Model) -> Model {
        let rotated = rotate_y(
            &rotate_x(&rotate_z(model, self.angle_z), self.angle_x),
            self.angle_y,
        );
        translate(&rotated, self.translation)
    }

    /// Advances each angle by `spin` and clamps the result with [`clamp_angle`].
    pub fn advance(&mut self, spin: Spin) {
        self.angle_z = clamp_angle(self.angle_z + spin.z);
        self.angle_x = clamp_angle(self.angle_x + spin.x);
        self.angle_y = clamp_angle(self.angle_y + spin.y);
    }
}
