//! Gray-scale image storage and borrowed views.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride.
//! The stride counts elements between the starts of consecutive rows, so a
//! stride larger than the width represents padded rows. ROI slices are zero-copy
//! views into the same backing slice and retain the original stride.
//!
//! `Graymap` is the owned, exclusively-held pixel buffer with a per-image
//! maximum gray level. Every algorithm in the crate reads through a view.

use crate::util::{GrayAreaError, GrayAreaResult};

pub mod geometry;
mod graymap;
#[cfg(feature = "image-io")]
pub mod io;
pub mod ops;

pub use graymap::Graymap;

/// Borrowed 2D image view with an explicit stride.
///
/// Zero width or height is allowed and describes an empty view.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> GrayAreaResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> GrayAreaResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(GrayAreaError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns true when the view holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        if self.width == 0 {
            return Some(&self.data[..0]);
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Iterates over the rows from top to bottom.
    ///
    /// A zero-width view yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + 'a
    where
        T: 'a,
    {
        let data = self.data;
        let width = self.width;
        let stride = self.stride;
        (0..self.height).map(move |y| {
            if width == 0 {
                return &data[..0];
            }
            let start = y * stride;
            &data[start..start + width]
        })
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    ///
    /// The rectangle `[x, x + width) x [y, y + height)` must lie inside the
    /// view; an empty rectangle is accepted anywhere on or inside the border.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> GrayAreaResult<ImageView<'a, T>> {
        let out_of_bounds = GrayAreaError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or(out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or(out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }
        if width == 0 || height == 0 {
            return ImageView::new(&self.data[..0], width, height, width);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(GrayAreaError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(GrayAreaError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        ImageView::new(data, width, height, self.stride)
    }
}

impl ImageView<'_, u8> {
    /// Returns true when the `width x height` rectangle at `(x, y)` fits.
    pub fn contains_rect(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        x.checked_add(width).is_some_and(|end| end <= self.width)
            && y.checked_add(height).is_some_and(|end| end <= self.height)
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> GrayAreaResult<usize> {
    if stride < width {
        return Err(GrayAreaError::InvalidStride { width, stride });
    }
    if width == 0 || height == 0 {
        return Ok(0);
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(GrayAreaError::InvalidDimensions { width, height })?;
    Ok(needed)
}
