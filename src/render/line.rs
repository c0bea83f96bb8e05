//! Attribute-interpolating line drawing.
//!
//! One primitive serves both as the scanline rasterizer's span filler and as
//! the wireframe line drawer. It walks a segment between two integer screen
//! points, interpolating depth and texture coordinates linearly along the
//! axis being stepped.
//!
//! # Endpoint policy
//!
//! ```text
//! vertical   (x1 == x2):  y in y1..y2    far end excluded
//! horizontal (y1 == y2):  x in x1..x2    far end excluded
//! diagonal:               s in s1..=s2   both ends included
//! ```
//!
//! The asymmetry is long-standing and existing pixel output depends on it,
//! so spans never touch their right-hand end pixel while diagonals always
//! reach both ends. A segment whose endpoints coincide draws nothing.
//!
//! Diagonals step along x when `|dy/dx| < |dx/dy|` and along y otherwise, so
//! there are no gaps. The dependent coordinate comes from the line equation
//! and is truncated toward zero.

use super::framebuffer::FrameBuffer;
use crate::math::lerp;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::texture::Texture;

/// A segment endpoint in pixel space with its attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Endpoint {
    pub x: i32,
    pub y: i32,
    pub z: f32,
    pub u: f32,
    pub v: f32,
}

impl Endpoint {
    pub const fn new(x: i32, y: i32, z: f32, u: f32, v: f32) -> Self {
        Self { x, y, z, u, v }
    }

    /// An endpoint with zero depth and texture coordinates.
    pub const fn at(x: i32, y: i32) -> Self {
        Self::new(x, y, 0.0, 0.0, 0.0)
    }

    /// Snaps a projected point to its pixel by truncation, keeping z and uv.
    ///
    /// # Panics
    /// Panics if x or y is NaN or infinite, as produced by a perspective
    /// divide at `z == 0`.
    pub fn from_screen(p: Vec3, uv: Vec2) -> Self {
        assert!(
            p.x.is_finite() && p.y.is_finite(),
            "non-finite screen coordinate ({}, {})",
            p.x,
            p.y
        );
        let (x, y) = p.xy().to_pixel();
        Self::new(x, y, p.z, uv.x, uv.y)
    }
}

/// What a rasterized pixel is colored with.
#[derive(Clone, Copy, Debug)]
pub enum Paint<'a> {
    Solid(u32),
    Textured(&'a Texture),
}

impl Paint<'_> {
    #[inline]
    fn color_at(&self, u: f32, v: f32) -> u32 {
        match self {
            Paint::Solid(color) => *color,
            Paint::Textured(texture) => texture.sample(u, v),
        }
    }
}

/// Whether pixel writes consult the depth plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthMode {
    /// Write only where z is nearer than the stored depth.
    Tested,
    /// Overwrite color unconditionally and leave depth alone.
    Ignored,
}

/// Draws the segment `a`–`b` into `buffer`.
///
/// # Panics
/// Panics if any visited pixel lies outside the buffer.
pub fn draw_line(
    buffer: &mut FrameBuffer,
    a: Endpoint,
    b: Endpoint,
    paint: Paint,
    depth: DepthMode,
) {
    let (mut a, mut b) = (a, b);

    if a.x == b.x {
        if a.y > b.y {
            std::mem::swap(&mut a, &mut b);
        }
        for y in a.y..b.y {
            plot(buffer, a.x, y, &a, &b, param(y, a.y, b.y), paint, depth);
        }
        return;
    }

    if a.y == b.y {
        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
        }
        for x in a.x..b.x {
            plot(buffer, x, a.y, &a, &b, param(x, a.x, b.x), paint, depth);
        }
        return;
    }

    let dy_dx = (a.y - b.y) as f32 / (a.x - b.x) as f32;
    let dx_dy = (a.x - b.x) as f32 / (a.y - b.y) as f32;

    if dy_dx.abs() < dx_dy.abs() {
        // Shallow: one pixel per column.
        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
        }
        let intercept = b.y as f32 - dy_dx * b.x as f32;
        for x in a.x..=b.x {
            let y = (dy_dx * x as f32 + intercept) as i32;
            plot(buffer, x, y, &a, &b, param(x, a.x, b.x), paint, depth);
        }
    } else {
        // Steep: one pixel per row.
        if a.y > b.y {
            std::mem::swap(&mut a, &mut b);
        }
        let intercept = b.x as f32 - dx_dy * b.y as f32;
        for y in a.y..=b.y {
            let x = (dx_dy * y as f32 + intercept) as i32;
            plot(buffer, x, y, &a, &b, param(y, a.y, b.y), paint, depth);
        }
    }
}

/// Progress of `s` from `s0` to `s1`, or 0 for a zero-length range.
#[inline]
fn param(s: i32, s0: i32, s1: i32) -> f32 {
    if s1 == s0 {
        0.0
    } else {
        (s - s0) as f32 / (s1 - s0) as f32
    }
}

#[inline]
#[allow(clippy::too_many_arguments)]
fn plot(
    buffer: &mut FrameBuffer,
    x: i32,
    y: i32,
    a: &Endpoint,
    b: &Endpoint,
    t: f32,
    paint: Paint,
    depth: DepthMode,
) {
    let color = match paint {
        Paint::Solid(color) => color,
        Paint::Textured(_) => paint.color_at(lerp(a.u, b.u, t), lerp(a.v, b.v, t)),
    };
    match depth {
        DepthMode::Tested => {
            buffer.put_pixel_with_depth(x, y, lerp(a.z, b.z, t), color);
        }
        DepthMode::Ignored => buffer.put_pixel(x, y, color),
    }
}
