//! Packed RGB image container
//!
//! `RgbImage` exists as a rendering output, for example when painting a
//! label map with per-component colors. Each pixel is a packed 32-bit
//! `0xRRGGBBAA` word with red in the most significant byte.

use crate::error::{Error, Result};

/// Color channel packing helpers for `0xRRGGBBAA` pixels.
pub mod color {
    /// Shift amount of the red channel
    pub const RED_SHIFT: u32 = 24;
    /// Shift amount of the green channel
    pub const GREEN_SHIFT: u32 = 16;
    /// Shift amount of the blue channel
    pub const BLUE_SHIFT: u32 = 8;
    /// Shift amount of the alpha channel
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract the red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract the green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract the blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract the alpha component from a packed pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque packed pixel from RGB components.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract the RGB components from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }
}

/// Packed RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl RgbImage {
    /// Create a new image filled with opaque black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![color::compose_rgb(0, 0, 0); (width as usize) * (height as usize)];
        Ok(RgbImage {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the packed pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Get the RGB components at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get(x, y).map(color::extract_rgb)
    }

    /// Set the RGB components at (x, y), keeping the pixel opaque.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)] =
            color::compose_rgb(r, g, b);
        Ok(())
    }

    /// Get raw access to the packed row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }
}
