//! Scanline-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by descending screen Y, moving each vertex's depth
//!    and UV along with it.
//! 2. **Decompose** the triangle into at most two flat triangles, each with
//!    one horizontal edge.
//! 3. **Fill** each flat triangle one integer scanline at a time, handing the
//!    span between its two edges to [`draw_line`](super::line::draw_line).
//!
//! # Triangle Decomposition
//!
//! ```text
//!        p3                   p3
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>  p2  /----\ mid   <- split at p2.y
//!  p2 /      \              \    /
//!     `-.     \              `-./
//!        `-.   \               p1
//!           `-. \
//!              `p1
//! ```
//!
//! `mid` lies on the long edge p1–p3 at `p2.y`; its x, z, u and v are
//! interpolated along that edge.
//!
//! # Interpolation
//!
//! Depth and UV are interpolated linearly in screen space, first along each
//! edge by Y and then across the span by X. There is no perspective
//! correction, so textures swim on strongly foreshortened faces.

use super::framebuffer::FrameBuffer;
use super::line::{draw_line, DepthMode, Endpoint, Paint};
use super::Triangle;
use crate::math::lerp;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::model::Vertex;

/// Scanline-based triangle rasterizer.
///
/// Input vertices are in screen space: x and y in pixels, z the camera-space
/// depth passed through projection. Every pixel is depth-tested.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by descending Y.
    ///
    /// After sorting: `p1.y >= p2.y >= p3.y`. Whole vertices are swapped, so
    /// attributes stay attached to their positions.
    fn sort_vertices(p1: &mut Vertex, p2: &mut Vertex, p3: &mut Vertex) {
        if p1.position.y < p2.position.y {
            std::mem::swap(p1, p2);
        }
        if p2.position.y < p3.position.y {
            std::mem::swap(p2, p3);
        }
        if p1.position.y < p2.position.y {
            std::mem::swap(p1, p2);
        }
    }

    /// Point at parameter `t` along `a`–`b`, with every attribute interpolated.
    fn lerp_vertex(a: &Vertex, b: &Vertex, t: f32) -> Vertex {
        Vertex::new(
            Vec3::new(
                lerp(a.position.x, b.position.x, t),
                lerp(a.position.y, b.position.y, t),
                lerp(a.position.z, b.position.z, t),
            ),
            Vec2::new(lerp(a.uv.x, b.uv.x, t), lerp(a.uv.y, b.uv.y, t)),
        )
    }

    /// Fills a triangle whose edge `a`–`b` is horizontal, with `apex` opposite.
    ///
    /// Works for apex above or below the flat edge. Zero-height triangles
    /// draw nothing.
    fn fill_flat_triangle(
        apex: &Vertex,
        a: &Vertex,
        b: &Vertex,
        paint: Paint,
        buffer: &mut FrameBuffer,
    ) {
        let height = a.position.y - apex.position.y;
        if height == 0.0 {
            return;
        }

        let y_start = apex.position.y.min(a.position.y).ceil() as i32;
        let y_end = apex.position.y.max(a.position.y).floor() as i32;

        for y in y_start..=y_end {
            // Progress from the apex (0) to the flat edge (1)
            let t = (y as f32 - apex.position.y) / height;

            let left = Self::lerp_vertex(apex, a, t);
            let right = Self::lerp_vertex(apex, b, t);

            draw_line(
                buffer,
                Endpoint::new(left.position.x as i32, y, left.position.z, left.uv.x, left.uv.y),
                Endpoint::new(
                    right.position.x as i32,
                    y,
                    right.position.z,
                    right.uv.x,
                    right.uv.y,
                ),
                paint,
                DepthMode::Tested,
            );
        }
    }

    /// Fills a triangle using the scanline algorithm.
    ///
    /// 1. Sort so that `p1.y >= p2.y >= p3.y`.
    /// 2. If two vertices share a Y the triangle is already flat: fill it.
    /// 3. Otherwise split the long edge p1–p3 at `p2.y` and fill
    ///    `(p2, mid, p1)` and `(p2, mid, p3)`.
    ///
    /// # Panics
    /// Panics if a vertex has a non-finite x or y (a perspective divide at
    /// `z == 0`), or if a covered pixel falls outside `buffer`.
    pub fn fill_triangle(&self, triangle: &Triangle, paint: Paint, buffer: &mut FrameBuffer) {
        for v in &triangle.vertices {
            assert!(
                v.position.x.is_finite() && v.position.y.is_finite(),
                "non-finite screen coordinate ({}, {})",
                v.position.x,
                v.position.y
            );
        }

        let [mut p1, mut p2, mut p3] = triangle.vertices;

        Self::sort_vertices(&mut p1, &mut p2, &mut p3);

        // Case 1: flat edge on the high-Y side
        if p1.position.y == p2.position.y {
            Self::fill_flat_triangle(&p3, &p1, &p2, paint, buffer);
            return;
        }

        // Case 2: flat edge on the low-Y side
        if p2.position.y == p3.position.y {
            Self::fill_flat_triangle(&p1, &p2, &p3, paint, buffer);
            return;
        }

        // Case 3: general triangle, split p1-p3 at p2's Y
        let t = (p2.position.y - p1.position.y) / (p3.position.y - p1.position.y);
        let mut mid = Self::lerp_vertex(&p1, &p3, t);
        mid.position.y = p2.position.y;

        Self::fill_flat_triangle(&p1, &p2, &mid, paint, buffer);
        Self::fill_flat_triangle(&p3, &p2, &mid, paint, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::projection::Projector;
    use crate::texture::Texture;

    fn screen_vertex(x: f32, y: f32, z: f32) -> Vertex {
        Vertex::new(Vec3::new(x, y, z), Vec2::ZERO)
    }

    fn tri(points: [(f32, f32); 3], z: f32) -> Triangle {
        Triangle::new(points.map(|(x, y)| screen_vertex(x, y, z)))
    }

    fn count(fb: &FrameBuffer, color: u32) -> usize {
        fb.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn sort_orders_descending_and_keeps_attributes() {
        let mut a = Vertex::new(Vec3::new(0.0, 1.0, 10.0), Vec2::new(0.1, 0.1));
        let mut b = Vertex::new(Vec3::new(0.0, 9.0, 20.0), Vec2::new(0.9, 0.9));
        let mut c = Vertex::new(Vec3::new(0.0, 5.0, 30.0), Vec2::new(0.5, 0.5));
        ScanlineRasterizer::sort_vertices(&mut a, &mut b, &mut c);
        assert_eq!(a.position.y, 9.0);
        assert_eq!(a.position.z, 20.0);
        assert_eq!(a.uv, Vec2::new(0.9, 0.9));
        assert_eq!(b.position.z, 30.0);
        assert_eq!(c.position.z, 10.0);
    }

    #[test]
    fn fills_right_triangle_with_span_policy() {
        // Legs along x=2 and y=2, hypotenuse from (2,6) to (6,2).
        let mut fb = FrameBuffer::new(10, 10);
        let raster = ScanlineRasterizer::new();
        raster.fill_triangle(
            &tri([(2.0, 2.0), (6.0, 2.0), (2.0, 6.0)], 1.0),
            Paint::Solid(colors::RED),
            &mut fb,
        );
        // Row y covers x in 2..(8 - y), far end excluded.
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..=6).contains(&y) && x >= 2 && x < 8 - y;
                let expected = if inside { colors::RED } else { colors::BACKGROUND };
                assert_eq!(fb.get_pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn vertex_order_does_not_change_coverage() {
        let points = [(1.0, 1.0), (8.0, 3.0), (3.0, 8.0)];
        let raster = ScanlineRasterizer::new();
        let mut reference = FrameBuffer::new(10, 10);
        raster.fill_triangle(&tri(points, 1.0), Paint::Solid(colors::RED), &mut reference);
        assert!(count(&reference, colors::RED) > 0);

        let orders = [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let mut fb = FrameBuffer::new(10, 10);
            let permuted = order.map(|i| points[i]);
            raster.fill_triangle(&tri(permuted, 1.0), Paint::Solid(colors::RED), &mut fb);
            assert_eq!(fb.pixels(), reference.pixels(), "order {:?}", order);
        }
    }

    #[test]
    fn general_triangle_is_split_without_gaps() {
        let mut fb = FrameBuffer::new(20, 20);
        ScanlineRasterizer::new().fill_triangle(
            &tri([(10.0, 1.0), (18.0, 9.0), (2.0, 17.0)], 1.0),
            Paint::Solid(colors::GREEN),
            &mut fb,
        );
        // Every scanline strictly inside the triangle has a contiguous run.
        for y in 2..17 {
            let row: Vec<i32> = (0..20)
                .filter(|&x| fb.get_pixel(x, y) == Some(colors::GREEN))
                .collect();
            assert!(!row.is_empty(), "row {} empty", y);
            assert_eq!(row.len() as i32, row[row.len() - 1] - row[0] + 1, "row {} has gaps", y);
        }
    }

    #[test]
    fn zero_height_triangle_draws_nothing() {
        let mut fb = FrameBuffer::new(10, 10);
        ScanlineRasterizer::new().fill_triangle(
            &tri([(1.0, 4.0), (5.0, 4.0), (8.0, 4.0)], 1.0),
            Paint::Solid(colors::RED),
            &mut fb,
        );
        assert_eq!(count(&fb, colors::RED), 0);
    }

    #[test]
    fn depth_is_interpolated_across_the_face() {
        let mut fb = FrameBuffer::new(12, 12);
        let triangle = Triangle::new([
            screen_vertex(0.0, 0.0, 1.0),
            screen_vertex(10.0, 0.0, 11.0),
            screen_vertex(0.0, 10.0, 1.0),
        ]);
        ScanlineRasterizer::new().fill_triangle(&triangle, Paint::Solid(colors::RED), &mut fb);
        // Depth grows with x along the top row.
        let d0 = fb.get_depth(0, 0).unwrap();
        let d5 = fb.get_depth(5, 0).unwrap();
        let d9 = fb.get_depth(9, 0).unwrap();
        assert!(d0 < d5 && d5 < d9);
        approx::assert_relative_eq!(d5, 6.0, epsilon = 1e-4);
    }

    #[test]
    fn textured_fill_samples_texture() {
        // u = x/10 along the top row, texel = floor(u * 3)
        let texture =
            Texture::procedural(4, 1, |x, _| if x == 0 { colors::BLUE } else { colors::GREEN });
        let triangle = Triangle::new([
            Vertex::new(Vec3::new(0.0, 0.0, 1.0), Vec2::new(0.0, 0.0)),
            Vertex::new(Vec3::new(10.0, 0.0, 1.0), Vec2::new(1.0, 0.0)),
            Vertex::new(Vec3::new(0.0, 10.0, 1.0), Vec2::new(0.0, 0.0)),
        ]);
        let mut fb = FrameBuffer::new(12, 12);
        ScanlineRasterizer::new().fill_triangle(&triangle, Paint::Textured(&texture), &mut fb);
        assert_eq!(fb.get_pixel(0, 0), Some(colors::BLUE));
        assert_eq!(fb.get_pixel(9, 0), Some(colors::GREEN));
        assert_eq!(fb.get_pixel(0, 9), Some(colors::BLUE));
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    fn vertex_at_zero_depth_fails_fast() {
        let projector = Projector::new(100, 100);
        let triangle = Triangle::new(
            [
                Vec3::new(0.5, 0.5, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.2, -0.1, 1.0),
            ]
            .map(|p| Vertex::new(projector.project(p), Vec2::ZERO)),
        );
        let mut fb = FrameBuffer::new(100, 100);
        ScanlineRasterizer::new().fill_triangle(&triangle, Paint::Solid(colors::RED), &mut fb);
    }
}
