//! Pixel-level rendering: frame buffer, line drawing and triangle fill.

pub mod framebuffer;
pub mod line;
pub mod scanline;

pub use framebuffer::FrameBuffer;
pub use line::{draw_line, DepthMode, Endpoint, Paint};
pub use scanline::ScanlineRasterizer;

use crate::model::Vertex;

/// A triangle ready for rasterization in screen space.
///
/// Positions hold pixel x and y plus camera-space depth in z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(vertices: [Vertex; 3]) -> Self {
        Self { vertices }
    }

    /// Outlines the triangle with color-only lines p1→p2, p2→p3, p3→p1.
    ///
    /// # Panics
    /// Panics if a vertex is non-finite or a line leaves the buffer.
    pub fn draw_wireframe(&self, buffer: &mut FrameBuffer, color: u32) {
        let [p1, p2, p3] = self
            .vertices
            .map(|v| Endpoint::from_screen(v.position, v.uv));

        for (a, b) in [(p1, p2), (p2, p3), (p3, p1)] {
            draw_line(buffer, a, b, Paint::Solid(color), DepthMode::Ignored);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::math::vec2::Vec2;
    use crate::math::vec3::Vec3;

    #[test]
    fn wireframe_outlines_without_touching_depth() {
        let mut fb = FrameBuffer::new(10, 10);
        let triangle = Triangle::new([
            Vertex::new(Vec3::new(1.0, 1.0, 2.0), Vec2::ZERO),
            Vertex::new(Vec3::new(7.0, 1.0, 2.0), Vec2::ZERO),
            Vertex::new(Vec3::new(1.0, 7.0, 2.0), Vec2::ZERO),
        ]);
        triangle.draw_wireframe(&mut fb, colors::WHITE);

        // Horizontal and vertical edges stop short of their larger coordinate.
        assert_eq!(fb.get_pixel(1, 1), Some(colors::WHITE));
        assert_eq!(fb.get_pixel(6, 1), Some(colors::WHITE));
        assert_eq!(fb.get_pixel(1, 6), Some(colors::WHITE));
        // Diagonal p2→p3 includes both ends.
        assert_eq!(fb.get_pixel(7, 1), Some(colors::WHITE));
        assert_eq!(fb.get_pixel(1, 7), Some(colors::WHITE));
        // Interior untouched.
        assert_eq!(fb.get_pixel(3, 3), Some(colors::BACKGROUND));
        assert!(fb.depths().iter().all(|d| *d == f32::INFINITY));
    }
}
