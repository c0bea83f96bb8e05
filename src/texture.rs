use std::path::Path;

use crate::colors;

/// Error raised while building a texture.
#[derive(Debug)]
pub enum TextureError {
    Image(image::ImageError),
    Dimensions { width: u32, height: u32, len: usize },
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TextureError::Image(e) => write!(f, "image error: {}", e),
            TextureError::Dimensions { width, height, len } => write!(
                f,
                "texture {}x{} needs {} texels, got {}",
                width,
                height,
                (*width as usize) * (*height as usize),
                len
            ),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Image(e) => Some(e),
            TextureError::Dimensions { .. } => None,
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Image(e)
    }
}

/// An immutable grid of ARGB texels sampled with nearest-neighbor lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // Row-major, top row first.
    width: u32,
    height: u32,
}

impl Texture {
    /// Wraps an existing texel grid.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 || data.len() != (width as usize) * (height as usize) {
            return Err(TextureError::Dimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a texture by calling `f(x, y)` once per texel.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn procedural(width: u32, height: u32, f: impl Fn(u32, u32) -> u32) -> Self {
        assert!(width > 0 && height > 0, "texture dimensions must be non-zero");
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            data,
            width,
            height,
        }
    }

    /// A two-tone checkerboard with square cells of `cell` texels.
    pub fn checkerboard(width: u32, height: u32, cell: u32) -> Self {
        let cell = cell.max(1);
        Self::procedural(width, height, |x, y| {
            if ((x / cell) + (y / cell)) % 2 == 0 {
                colors::CHECKER_LIGHT
            } else {
                colors::CHECKER_DARK
            }
        })
    }

    /// 1x1 placeholder used when an image cannot be loaded.
    pub fn stub() -> Self {
        Self {
            data: vec![colors::WHITE],
            width: 1,
            height: 1,
        }
    }

    // Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                colors::argb(a, r, g, b)
            })
            .collect();

        Self::from_pixels(width, height, data)
    }

    /// Loads an image, falling back to [`Texture::stub`] if it cannot be read.
    pub fn load_or_stub<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(texture) => {
                log::info!(
                    "loaded texture {} ({}x{})",
                    path.display(),
                    texture.width,
                    texture.height
                );
                texture
            }
            Err(e) => {
                log::warn!("could not load texture {}: {}", path.display(), e);
                Self::stub()
            }
        }
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// u and v are clamped to `[0, 1]` and mapped to texel
    /// `(⌊u·(W−1)⌋, ⌊v·(H−1)⌋)`. v = 0 is the top row.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let x = (u * (self.width - 1) as f32) as u32;
        let y = (v * (self.height - 1) as f32) as u32;

        self.data[(y * self.width + x) as usize]
    }

    /// Texel at integer coordinates.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the texture.
    pub fn texel(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height, "texel ({}, {}) out of bounds", x, y);
        self.data[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
}
