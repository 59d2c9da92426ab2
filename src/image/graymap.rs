//! Owned 8-bit gray-scale pixel buffer.

use crate::image::ImageView;
use crate::util::math::{checked_area, try_zeroed};
use crate::util::{GrayAreaError, GrayAreaResult};

/// Owned row-major gray-scale image with a maximum gray level.
///
/// Pixel `(x, y)` lives at index `y * width + x`. Every sample lies in
/// `[0, maxval]`; `maxval` itself is the pure white level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graymap {
    data: Vec<u8>,
    width: usize,
    height: usize,
    maxval: u8,
}

impl Graymap {
    /// Largest gray level any image may declare.
    pub const MAX_GRAY: u8 = 255;

    /// Creates a black image of the given size.
    pub fn new(width: usize, height: usize, maxval: u8) -> GrayAreaResult<Self> {
        check_maxval(maxval)?;
        let len = checked_area(width, height)?;
        let data = try_zeroed(len)?;
        Ok(Self {
            data,
            width,
            height,
            maxval,
        })
    }

    /// Wraps a contiguous row-major buffer.
    ///
    /// The buffer length must equal `width * height` and no sample may exceed
    /// `maxval`.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, maxval: u8) -> GrayAreaResult<Self> {
        check_maxval(maxval)?;
        let needed = checked_area(width, height)?;
        if data.len() < needed {
            return Err(GrayAreaError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(GrayAreaError::InvalidDimensions { width, height });
        }
        if let Some(&value) = data.iter().find(|&&v| v > maxval) {
            return Err(GrayAreaError::PixelOutOfRange { value, maxval });
        }
        Ok(Self {
            data,
            width,
            height,
            maxval,
        })
    }

    /// Copies a borrowed view into a new owned image.
    pub fn from_view(view: ImageView<'_, u8>, maxval: u8) -> GrayAreaResult<Self> {
        let mut img = Self::new(view.width(), view.height(), maxval)?;
        for (y, row) in view.rows().enumerate() {
            if let Some(&value) = row.iter().find(|&&v| v > maxval) {
                return Err(GrayAreaError::PixelOutOfRange { value, maxval });
            }
            let start = y * img.width;
            img.data[start..start + img.width].copy_from_slice(row);
        }
        Ok(img)
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the maximum gray level (white).
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Returns true when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, u8> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns the raw row-major samples.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Checks whether `(x, y)` is a pixel of this image.
    pub fn valid_pos(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Checks whether the `w x h` rectangle at `(x, y)` lies inside the image.
    pub fn valid_rect(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        self.view().contains_rect(x, y, w, h)
    }

    /// Returns the gray level at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if !self.valid_pos(x, y) {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Returns the gray level at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the image.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(
            self.valid_pos(x, y),
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.data[self.index(x, y)]
    }

    /// Sets the gray level at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the image or `level > maxval`.
    pub fn set(&mut self, x: usize, y: usize, level: u8) {
        assert!(
            self.valid_pos(x, y),
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        assert!(
            level <= self.maxval,
            "level {level} exceeds maxval {}",
            self.maxval
        );
        let idx = self.index(x, y);
        self.data[idx] = level;
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

fn check_maxval(maxval: u8) -> GrayAreaResult<()> {
    if maxval == 0 {
        return Err(GrayAreaError::InvalidMaxval { maxval });
    }
    Ok(())
}
