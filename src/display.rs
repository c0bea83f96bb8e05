//! Presentation boundary between the renderer and whatever shows its output.
//!
//! The renderer only needs somewhere to hand a finished frame. [`Surface`]
//! is implemented by the SDL2 [`Window`](crate::window::Window) and by
//! [`Capture`], an in-memory surface for headless runs and tests.

use std::path::Path;

/// Input events the frame loop reacts to, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Key(Key),
}

/// Keys with a binding in the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    C,
    T,
    P,
}

/// A sink for finished frames.
pub trait Surface {
    /// Shows one frame of `width * height` ARGB8888 pixels, row-major.
    fn present(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<(), String>;
}

/// Keeps a copy of the most recently presented frame.
#[derive(Debug, Default, Clone)]
pub struct Capture {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    frames: u64,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Color at (x, y) of the last frame, or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    /// Writes the last frame to an image file; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let img = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.pixels[(y * self.width + x) as usize];
            let [a, r, g, b] = argb.to_be_bytes();
            image::Rgba([r, g, b, a])
        });
        img.save(path)
    }
}

impl Surface for Capture {
    fn present(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<(), String> {
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(format!(
                "frame of {} pixels does not match {}x{}",
                pixels.len(),
                width,
                height
            ));
        }
        self.pixels.clear();
        self.pixels.extend_from_slice(pixels);
        self.width = width;
        self.height = height;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_keeps_last_frame() {
        let mut capture = Capture::new();
        capture.present(&[1, 2, 3, 4], 2, 2).unwrap();
        capture.present(&[5, 6, 7, 8], 2, 2).unwrap();
        assert_eq!(capture.frames(), 2);
        assert_eq!(capture.pixel(1, 1), Some(8));
        assert_eq!(capture.pixel(2, 0), None);
    }

    #[test]
    fn capture_rejects_mismatched_frame() {
        let mut capture = Capture::new();
        assert!(capture.present(&[1, 2, 3], 2, 2).is_err());
        assert_eq!(capture.frames(), 0);
    }
}
