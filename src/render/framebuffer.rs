//! Color and depth planes for one frame.
//!
//! The buffer is allocated once and cleared every frame. Pixel writes are
//! bounds-checked and panic on out-of-range coordinates: a pixel outside the
//! buffer means the geometry feeding it is wrong, and clipping it silently
//! would hide that.

use crate::colors;

/// Owned color and depth planes of equal size.
///
/// # Depth Buffer
///
/// Depth is camera-space z, passed through projection unchanged. Smaller is
/// nearer, since the camera sits at the origin looking down +Z. Cleared
/// depth is `+∞`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize)
            .checked_mul(height as usize)
            .expect("frame buffer size overflows usize");
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![f32::INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets both planes for a new frame without reallocating.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
        self.clear_depth();
    }

    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32,
            "pixel ({}, {}) outside {}x{} frame buffer",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Writes a pixel without touching the depth plane (wireframe, overlays).
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        let idx = self.index(x, y);
        self.color_buffer[idx] = color;
    }

    /// Writes a pixel if `z` is strictly nearer than the stored depth.
    ///
    /// Returns whether the write happened. Equal depth does not overwrite.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn put_pixel_with_depth(&mut self, x: i32, y: i32, z: f32, color: u32) -> bool {
        let idx = self.index(x, y);
        if z < self.depth_buffer[idx] {
            self.depth_buffer[idx] = z;
            self.color_buffer[idx] = color;
            true
        } else {
            false
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.depth_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Copies `src` into this buffer with its top-left corner at `(x, y)`.
    ///
    /// Both planes are copied verbatim, with no depth test.
    ///
    /// # Panics
    /// Panics if `src` does not fit entirely inside this buffer at that offset.
    pub fn blit(&mut self, src: &FrameBuffer, x: u32, y: u32) {
        assert!(
            x as usize + src.width as usize <= self.width as usize
                && y as usize + src.height as usize <= self.height as usize,
            "{}x{} sub-buffer at ({}, {}) exceeds {}x{} frame buffer",
            src.width,
            src.height,
            x,
            y,
            self.width,
            self.height
        );
        let w = src.width as usize;
        for row in 0..src.height as usize {
            let from = row * w;
            let to = (y as usize + row) * self.width as usize + x as usize;
            self.color_buffer[to..to + w].copy_from_slice(&src.color_buffer[from..from + w]);
            self.depth_buffer[to..to + w].copy_from_slice(&src.depth_buffer[from..from + w]);
        }
    }

    /// The color plane, row-major, `width * height` ARGB words.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn depths(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Copies the color plane out into `out`.
    ///
    /// # Panics
    /// Panics if `out.len() != width * height`.
    pub fn copy_pixels_into(&self, out: &mut [u32]) {
        out.copy_from_slice(&self.color_buffer);
    }
}

/// Views an ARGB pixel slice as native-endian bytes.
pub fn pixels_as_bytes(pixels: &[u32]) -> &[u8] {
    // SAFETY: u8 has no alignment requirement and every byte of a u32 is
    // initialized, so reinterpreting the slice with 4x the length is sound.
    unsafe { std::slice::from_raw_parts(pixels.as_ptr() as *const u8, pixels.len() * 4) }
}
