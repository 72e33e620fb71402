//! subpel-io - Raster I/O for subpel
//!
//! Converts between [`image::DynamicImage`] and [`Raster`] and reads or
//! writes rasters through the `image` crate's codecs. The file format is
//! inferred from the path extension.
//!
//! Channel layouts map as follows:
//!
//! | channels | layout |
//! |---|---|
//! | 1 | gray |
//! | 2 | gray + alpha |
//! | 3 | RGB |
//! | 4 | RGBA |

mod error;

pub use error::{IoError, IoResult};

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};
use std::path::Path;
use subpel_core::Raster;

/// Convert a decoded image to an 8-bit raster, keeping its channel count.
pub fn raster_from_image(img: &DynamicImage) -> IoResult<Raster<u8>> {
    let (width, height) = (img.width(), img.height());
    let (channels, data) = match img.color().channel_count() {
        1 => (1, img.to_luma8().into_raw()),
        2 => (2, img.to_luma_alpha8().into_raw()),
        3 => (3, img.to_rgb8().into_raw()),
        _ => (4, img.to_rgba8().into_raw()),
    };
    Ok(Raster::from_data(width, height, channels, data)?)
}

/// Convert a decoded image to a 16-bit raster, keeping its channel count.
pub fn raster_from_image_u16(img: &DynamicImage) -> IoResult<Raster<u16>> {
    let (width, height) = (img.width(), img.height());
    let (channels, data) = match img.color().channel_count() {
        1 => (1, img.to_luma16().into_raw()),
        2 => (2, img.to_luma_alpha16().into_raw()),
        3 => (3, img.to_rgb16().into_raw()),
        _ => (4, img.to_rgba16().into_raw()),
    };
    Ok(Raster::from_data(width, height, channels, data)?)
}

/// Convert an 8-bit raster to an image.
pub fn raster_to_image(raster: &Raster<u8>) -> IoResult<DynamicImage> {
    if raster.is_empty() {
        return Err(IoError::EmptyRaster);
    }
    let (w, h) = raster.dimensions();
    let data = raster.data().to_vec();
    let img = match raster.channels() {
        1 => ImageBuffer::<Luma<u8>, _>::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::<LumaA<u8>, _>::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        4 => ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        n => return Err(IoError::UnsupportedChannels(n)),
    };
    // `Raster` guarantees the buffer length, so `from_raw` cannot come up short
    img.ok_or(IoError::UnsupportedChannels(raster.channels()))
}

/// Convert a 16-bit raster to an image.
pub fn raster_to_image_u16(raster: &Raster<u16>) -> IoResult<DynamicImage> {
    if raster.is_empty() {
        return Err(IoError::EmptyRaster);
    }
    let (w, h) = raster.dimensions();
    let data = raster.data().to_vec();
    let img = match raster.channels() {
        1 => ImageBuffer::<Luma<u16>, _>::from_raw(w, h, data).map(DynamicImage::ImageLuma16),
        2 => ImageBuffer::<LumaA<u16>, _>::from_raw(w, h, data).map(DynamicImage::ImageLumaA16),
        3 => ImageBuffer::<Rgb<u16>, _>::from_raw(w, h, data).map(DynamicImage::ImageRgb16),
        4 => ImageBuffer::<Rgba<u16>, _>::from_raw(w, h, data).map(DynamicImage::ImageRgba16),
        n => return Err(IoError::UnsupportedChannels(n)),
    };
    img.ok_or(IoError::UnsupportedChannels(raster.channels()))
}

/// Read an image file as an 8-bit raster.
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster<u8>> {
    let img = image::open(path)?;
    raster_from_image(&img)
}

/// Read an image file as a 16-bit raster.
pub fn read_raster_u16<P: AsRef<Path>>(path: P) -> IoResult<Raster<u16>> {
    let img = image::open(path)?;
    raster_from_image_u16(&img)
}

/// Write an 8-bit raster; the format follows the path extension.
pub fn write_raster<P: AsRef<Path>>(raster: &Raster<u8>, path: P) -> IoResult<()> {
    raster_to_image(raster)?.save(path)?;
    Ok(())
}

/// Write a 16-bit raster; the format follows the path extension.
pub fn write_raster_u16<P: AsRef<Path>>(raster: &Raster<u16>, path: P) -> IoResult<()> {
    raster_to_image_u16(raster)?.save(path)?;
    Ok(())
}
