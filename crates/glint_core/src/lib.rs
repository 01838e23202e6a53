//! glint core - raster storage and image output.
//!
//! This crate provides:
//!
//! - **Raster**: `ImageBuffer`, a row-major RGBA8 pixel grid addressed from the top-left
//! - **Bitmap output**: 32-bit top-down BMP encoding via `write_bmp` / `save_bmp`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{save_bmp, ImageBuffer};
//!
//! let mut image = ImageBuffer::new(2, 2);
//! image.set(1, 0, [255, 0, 0, 255]);
//! save_bmp(&image, "out.bmp")?;
//! ```

pub mod bitmap;
pub mod image;

// Re-export commonly used types
pub use bitmap::{save_bmp, write_bmp, BitmapError, BitmapResult};
pub use image::ImageBuffer;
