//! Error types for grayarea.

use thiserror::Error;

/// Result alias for grayarea operations.
pub type GrayAreaResult<T> = std::result::Result<T, GrayAreaError>;

/// Errors that can occur when building images, tables, or running filters.
///
/// Coordinate contract violations on single pixels and table rectangles are
/// not represented here; those accessors assert instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GrayAreaError {
    /// Width and height do not describe a representable image.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is too short for the requested layout.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Maximum gray level must lie in `1..=255`.
    #[error("invalid maxval {maxval}")]
    InvalidMaxval { maxval: u8 },
    /// A sample exceeds the image maximum gray level.
    #[error("pixel value {value} exceeds maxval {maxval}")]
    PixelOutOfRange { value: u8, maxval: u8 },
    /// A rectangle does not fit inside the image.
    #[error(
        "roi {width}x{height} at ({x}, {y}) out of bounds for {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// An auxiliary buffer could not be allocated.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },
    /// Image decoding or encoding failed.
    #[cfg(feature = "image-io")]
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
