//! 32-bit BMP encoding.
//!
//! Layout written by [`write_bmp`]:
//!
//! - 14 byte file header: "BM", total file size, two reserved u16 fields, pixel offset
//! - 40 byte info header: negative height (top-down rows), 1 plane, 32 bpp, no compression
//! - pixel data, 4 bytes per pixel in B, G, R, A order, no row padding
//!
//! All multi-byte fields are little-endian.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use thiserror::Error;

use crate::image::ImageBuffer;

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: u32 = 14;

/// Size of the info header in bytes.
pub const INFO_HEADER_SIZE: u32 = 40;

const BITS_PER_PIXEL: u16 = 32;
const BYTES_PER_PIXEL: u32 = 4;

/// Errors that can occur while writing a bitmap.
#[derive(Error, Debug)]
pub enum BitmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image dimensions {width}x{height} can't be stored in a bitmap")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Expected {expected} pixels, buffer holds {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type BitmapResult<T> = Result<T, BitmapError>;

/// Encode `image` as a BMP into `writer`.
pub fn write_bmp<W: Write>(image: &ImageBuffer, writer: &mut W) -> BitmapResult<()> {
    let expected = image.width as usize * image.height as usize;
    if image.pixels.len() != expected {
        return Err(BitmapError::SizeMismatch {
            expected,
            actual: image.pixels.len(),
        });
    }

    let invalid = || BitmapError::InvalidDimensions {
        width: image.width,
        height: image.height,
    };
    let width = i32::try_from(image.width).map_err(|_| invalid())?;
    let height = i32::try_from(image.height).map_err(|_| invalid())?;
    let image_size = image
        .width
        .checked_mul(image.height)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(invalid)?;
    let offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let file_size = offset.checked_add(image_size).ok_or_else(invalid)?;

    // File header
    writer.write_all(b"BM")?;
    writer.write_u32::<LittleEndian>(file_size)?;
    writer.write_u16::<LittleEndian>(0)?;
    writer.write_u16::<LittleEndian>(0)?;
    writer.write_u32::<LittleEndian>(offset)?;

    // Info header
    writer.write_u32::<LittleEndian>(INFO_HEADER_SIZE)?;
    writer.write_i32::<LittleEndian>(width)?;
    writer.write_i32::<LittleEndian>(-height)?;
    writer.write_u16::<LittleEndian>(1)?;
    writer.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
    writer.write_u32::<LittleEndian>(0)?; // BI_RGB
    writer.write_u32::<LittleEndian>(image_size)?;
    writer.write_i32::<LittleEndian>(0)?;
    writer.write_i32::<LittleEndian>(0)?;
    writer.write_u32::<LittleEndian>(0)?;
    writer.write_u32::<LittleEndian>(0)?;

    for [r, g, b, _] in &image.pixels {
        writer.write_all(&[*b, *g, *r, 255])?;
    }

    Ok(())
}

/// Encode `image` as a BMP file at `path`.
pub fn save_bmp(image: &ImageBuffer, path: impl AsRef<Path>) -> BitmapResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_bmp(image, &mut writer)?;
    writer.flush()?;

    log::info!(
        "Wrote {}x{} bitmap to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}
