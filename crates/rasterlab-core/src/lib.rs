//! Rasterlab Core - Grid containers for raster image processing
//!
//! This crate provides the data structures shared by the rasterlab
//! workspace:
//!
//! - [`GrayImage`] - 8-bit grayscale image
//! - [`BitMask`] - binary foreground/background mask
//! - [`LabelMap`] - per-pixel connected-component labels
//! - [`RgbImage`] - packed RGB rendering output
//! - [`Rect`] - axis-aligned bounding box
//!
//! All containers are dense row-major grids and reject zero dimensions at
//! construction, so downstream operations never see a malformed grid.

pub mod error;
pub mod gray;
pub mod histogram;
pub mod label;
pub mod mask;
pub mod rect;
pub mod rgb;

pub use error::{Error, Result};
pub use gray::GrayImage;
pub use histogram::GRAY_LEVELS;
pub use label::LabelMap;
pub use mask::BitMask;
pub use rect::Rect;
pub use rgb::{RgbImage, color};
