//! Pixel sink and the in-memory framebuffer.

use crate::{Color, Result, TracerError};

/// Destination for rendered pixels.
///
/// Coordinates are bounds-checked: an out-of-range access is an error, never
/// silently clamped.
pub trait PixelSink {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()>;

    fn get_pixel(&self, x: u32, y: u32) -> Result<Color>;
}

/// Row-major image buffer with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TracerError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        })
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixels as tightly packed RGB8 bytes, ready for image encoders.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width as usize)
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(TracerError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl PixelSink for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let index = self.index(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }
}
