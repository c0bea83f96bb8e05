//! Small fixed-size vector types used throughout the pipeline.

pub mod vec2;
pub mod vec3;

/// Linear interpolation between `a` and `b` at parameter `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
