//! Pixel buffer representation shared by every analysis pass.

use image::{DynamicImage, RgbaImage};

use crate::error::{AnalysisError, Result};

/// Decoded image data. Always stored as RGBA u8.
///
/// Decoding happens outside this crate — constructors only reinterpret
/// bytes that an external image decoder produced. Sources without an
/// alpha channel are stored with alpha 255 and `source_has_alpha = false`
/// so passes that treat alpha as signal can tell the difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in RGBA order, row-major.
    pub pixels: Vec<[u8; 4]>,
    /// Whether the source buffer carried a real alpha channel.
    pub source_has_alpha: bool,
}

impl PixelBuffer {
    /// Build a buffer from RGBA pixels, validating the pixel count.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 4]>, source_has_alpha: bool) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(AnalysisError::DimensionMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            source_has_alpha,
        })
    }

    /// Build a buffer from raw RGBA bytes (4 bytes per pixel).
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(AnalysisError::DimensionMismatch {
                width,
                height,
                expected: width as usize * height as usize,
                actual: bytes.len().div_ceil(4),
            });
        }
        let pixels: Vec<[u8; 4]> = bytemuck::cast_slice::<u8, [u8; 4]>(bytes).to_vec();
        Self::new(width, height, pixels, true)
    }

    /// Build a buffer from raw RGB bytes (3 bytes per pixel). Alpha is
    /// filled with 255.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 3 != 0 {
            return Err(AnalysisError::DimensionMismatch {
                width,
                height,
                expected: width as usize * height as usize,
                actual: bytes.len().div_ceil(3),
            });
        }
        let pixels: Vec<[u8; 4]> = bytemuck::cast_slice::<u8, [u8; 3]>(bytes)
            .iter()
            .map(|&[r, g, b]| [r, g, b, 255])
            .collect();
        Self::new(width, height, pixels, false)
    }

    /// Build a buffer from a decoded `image` crate image.
    pub fn from_image(image: &DynamicImage) -> Self {
        let has_alpha = image.color().has_alpha();
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = bytemuck::cast_slice::<u8, [u8; 4]>(rgba.as_raw()).to_vec();
        Self {
            width,
            height,
            pixels,
            source_has_alpha: has_alpha,
        }
    }

    /// Convert back into an `RgbaImage` for the external encoder.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut raw = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            raw.extend_from_slice(px);
        }
        // Length is an invariant of the constructors, so this cannot fail.
        RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`. Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// RGB triples for the color passes, alpha dropped.
    pub fn rgb_pixels(&self) -> Vec<[u8; 3]> {
        self.pixels.iter().map(|&[r, g, b, _]| [r, g, b]).collect()
    }
}
