//! 8-bit grayscale image container
//!
//! `GrayImage` is the working representation for every intensity-domain
//! operation in the workspace: resampling, histogram transforms, mean
//! filtering, and thresholding all consume and produce it.
//!
//! # Storage
//!
//! Pixels are stored unpacked in a dense row-major `Vec<u8>`. Row `y`
//! occupies `data[y*width .. (y+1)*width]`.

use crate::error::{Error, Result};

/// 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use rasterlab_core::GrayImage;
///
/// let img = GrayImage::new(640, 480).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.get(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u8; (width as usize) * (height as usize)];
        Ok(GrayImage {
            width,
            height,
            data,
        })
    }

    /// Create an image from a raw row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0, or
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(GrayImage {
            width,
            height,
            data,
        })
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Result<Self> {
        let mut img = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                img.set_unchecked(x, y, f(x, y));
            }
        }
        Ok(img)
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

    /// Get the pixel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the pixel value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y, val);
        Ok(())
    }

    /// Set the pixel value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, val: u8) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = val;
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: u8) {
        self.data.fill(val);
    }

    /// Get a view of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get raw access to the row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let img = GrayImage::new(100, 200).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 200);
        assert!(img.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_creation_invalid() {
        assert!(GrayImage::new(0, 100).is_err());
        assert!(GrayImage::new(100, 0).is_err());
    }

    #[test]
    fn test_from_raw() {
        let img = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(img.get(0, 0), Some(1));
        assert_eq!(img.get(1, 0), Some(2));
        assert_eq!(img.get(0, 1), Some(3));
        assert_eq!(img.get(1, 1), Some(4));
    }

    #[test]
    fn test_from_raw_size_mismatch() {
        assert!(GrayImage::from_raw(2, 2, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut img = GrayImage::new(10, 10).unwrap();
        img.set(3, 4, 200).unwrap();
        assert_eq!(img.get(3, 4), Some(200));
        assert_eq!(img.get(10, 0), None);
        assert!(img.set(0, 10, 1).is_err());
    }

    #[test]
    fn test_from_fn_row_major() {
        let img = GrayImage::from_fn(3, 2, |x, y| (y * 3 + x) as u8).unwrap();
        assert_eq!(img.data(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(img.row(1), &[3, 4, 5]);
    }

    #[test]
    fn test_fill() {
        let mut img = GrayImage::new(4, 4).unwrap();
        img.fill(17);
        assert!(img.data().iter().all(|&v| v == 17));
    }
}
