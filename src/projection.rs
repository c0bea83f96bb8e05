//! Perspective divide and viewport mapping.
//!
//! The projection is the simplest possible pinhole model: divide x and y by
//! z, then stretch the `[-1, 1]` square over the frame buffer with Y flipped.
//! There is no near plane. A vertex with `z == 0` divides by zero and yields
//! infinite or NaN coordinates, which the pixel writer rejects.

use crate::math::vec3::Vec3;

/// Returns `(x/z, y/z, z)`.
///
/// z is passed through untouched so it can be used for depth testing later.
#[inline]
pub fn apply_perspective(v: Vec3) -> Vec3 {
    Vec3::new(v.x / v.z, v.y / v.z, v.z)
}

/// Maps normalized device coordinates to pixel space.
///
/// `x' = (x + 1)·W/2`, `y' = (−y + 1)·H/2`. Screen Y grows downward while
/// model Y grows upward. z is passed through.
#[inline]
pub fn to_screen_space(v: Vec3, width: u32, height: u32) -> Vec3 {
    Vec3::new(
        (v.x + 1.0) * (width as f32 / 2.0),
        (-v.y + 1.0) * (height as f32 / 2.0),
        v.z,
    )
}

/// Projects camera-space points onto a fixed-size viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projector {
    width: u32,
    height: u32,
}

impl Projector {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Perspective divide followed by the viewport mapping.
    #[inline]
    pub fn project(&self, v: Vec3) -> Vec3 {
        to_screen_space(apply_perspective(v), self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perspective_divides_by_depth() {
        let p = apply_perspective(Vec3::new(2.0, -1.0, 4.0));
        assert_relative_eq!(p.x, 0.5);
        assert_relative_eq!(p.y, -0.25);
        assert_eq!(p.z, 4.0);
    }

    #[test]
    fn perspective_at_zero_depth_is_not_finite() {
        let p = apply_perspective(Vec3::new(1.0, 1.0, 0.0));
        assert!(!p.x.is_finite());
        assert!(!p.y.is_finite());
    }

    #[test]
    fn screen_space_flips_y_and_centers_origin() {
        let center = to_screen_space(Vec3::new(0.0, 0.0, 3.0), 100, 50);
        assert_relative_eq!(center.x, 50.0);
        assert_relative_eq!(center.y, 25.0);
        assert_eq!(center.z, 3.0);

        let top_left = to_screen_space(Vec3::new(-1.0, 1.0, 1.0), 100, 50);
        assert_relative_eq!(top_left.x, 0.0);
        assert_relative_eq!(top_left.y, 0.0);

        let bottom_right = to_screen_space(Vec3::new(1.0, -1.0, 1.0), 100, 50);
        assert_relative_eq!(bottom_right.x, 100.0);
        assert_relative_eq!(bottom_right.y, 50.0);
    }

    #[test]
    fn projector_composes_divide_and_viewport() {
        let projector = Projector::new(100, 100);
        let p = projector.project(Vec3::new(1.0, 1.0, 2.0));
        assert_relative_eq!(p.x, 75.0);
        assert_relative_eq!(p.y, 25.0);
        assert_eq!(p.z, 2.0);
    }
}
