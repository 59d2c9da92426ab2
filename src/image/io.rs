//! Loading and saving gray-scale images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Paths ending in `.pgm`
//! go through the binary graymap (P5) codec and keep the header maxval in
//! both directions. Every other format is converted to 8-bit luma and loads
//! with `maxval = 255`.

use crate::image::{Graymap, ImageView};
use crate::util::math::{checked_area, try_zeroed};
use crate::util::{GrayAreaError, GrayAreaResult};
use image::codecs::pnm::{GraymapHeader, PnmDecoder, PnmEncoder, PnmHeader, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> GrayAreaResult<ImageView<'_, u8>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageView::from_slice(img.as_raw(), width, height)
}

/// Creates an owned graymap from a dynamic image.
pub fn graymap_from_dynamic_image(img: &image::DynamicImage) -> GrayAreaResult<Graymap> {
    let gray = img.to_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    Graymap::from_vec(gray.into_raw(), width, height, Graymap::MAX_GRAY)
}

/// Loads an image from disk and converts it to a graymap.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> GrayAreaResult<Graymap> {
    let path = path.as_ref();
    if is_pgm(path) {
        return load_pgm(path);
    }
    let img = image::open(path).map_err(io_error)?;
    graymap_from_dynamic_image(&img)
}

/// Saves a graymap; the format follows the file extension.
///
/// `.pgm` files carry the image's own maxval. Other formats store the levels
/// as-is, so images with `maxval < 255` appear darker to viewers.
pub fn save_gray_image<P: AsRef<Path>>(img: &Graymap, path: P) -> GrayAreaResult<()> {
    let path = path.as_ref();
    let (width, height) = dims_u32(img)?;
    if is_pgm(path) {
        return save_pgm(img, width, height, path);
    }
    let buffer = image::GrayImage::from_raw(width, height, img.as_slice().to_vec()).ok_or(
        GrayAreaError::BufferTooSmall {
            needed: img.width() * img.height(),
            got: img.as_slice().len(),
        },
    )?;
    buffer.save(path).map_err(io_error)
}

fn load_pgm(path: &Path) -> GrayAreaResult<Graymap> {
    let file = File::open(path).map_err(io_error)?;
    let decoder = PnmDecoder::new(BufReader::new(file)).map_err(io_error)?;
    let (mut reader, header) = decoder.into_inner();
    if !matches!(header.subtype(), PnmSubtype::Graymap(SampleEncoding::Binary)) {
        return Err(GrayAreaError::ImageIo {
            reason: "expected a binary graymap (P5)".to_string(),
        });
    }
    let maxval = u8::try_from(header.maximal_sample()).map_err(|_| GrayAreaError::ImageIo {
        reason: format!("maxval {} exceeds 8 bits", header.maximal_sample()),
    })?;

    let width = header.width() as usize;
    let height = header.height() as usize;
    let mut data: Vec<u8> = try_zeroed(checked_area(width, height)?)?;
    reader.read_exact(&mut data).map_err(io_error)?;
    Graymap::from_vec(data, width, height, maxval)
}

fn save_pgm(img: &Graymap, width: u32, height: u32, path: &Path) -> GrayAreaResult<()> {
    let header = PnmHeader::from(GraymapHeader {
        encoding: SampleEncoding::Binary,
        width,
        height,
        maxwhite: u32::from(img.maxval()),
    });
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    PnmEncoder::new(&mut writer)
        .with_header(header)
        .write_image(img.as_slice(), width, height, ExtendedColorType::L8)
        .map_err(io_error)?;
    writer.flush().map_err(io_error)
}

fn is_pgm(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"))
}

fn dims_u32(img: &Graymap) -> GrayAreaResult<(u32, u32)> {
    let invalid = || GrayAreaError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    };
    let width = u32::try_from(img.width()).map_err(|_| invalid())?;
    let height = u32::try_from(img.height()).map_err(|_| invalid())?;
    Ok((width, height))
}

fn io_error<E: std::fmt::Display>(err: E) -> GrayAreaError {
    GrayAreaError::ImageIo {
        reason: err.to_string(),
    }
}
