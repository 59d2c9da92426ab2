//! Summed-area (prefix-sum) tables.
//!
//! A table has the same dimensions as its source and stores, at `(x, y)`,
//! the sum of the derived values of every source pixel `(i, j)` with
//! `i <= x` and `j <= y`. Any axis-aligned rectangle sum is then four
//! lookups away. Entries are `u64`, wide enough for `width * height * 255^2`.

use crate::image::ImageView;
use crate::util::math::{checked_area, try_zeroed};
use crate::util::GrayAreaResult;

/// Inclusive prefix sums over a derived per-pixel value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummedAreaTable {
    width: usize,
    height: usize,
    data: Vec<u64>,
}

impl SummedAreaTable {
    /// Builds a table of `value(pixel)` over `src`.
    ///
    /// Cells are filled row by row; each one only reads its left, upper and
    /// upper-left neighbors, all of which are already final.
    pub fn build<F>(src: ImageView<'_, u8>, value: F) -> GrayAreaResult<Self>
    where
        F: Fn(u8) -> u64,
    {
        let width = src.width();
        let height = src.height();
        let len = checked_area(width, height)?;
        let mut data: Vec<u64> = try_zeroed(len)?;

        for (y, row) in src.rows().enumerate() {
            let base = y * width;
            for (x, &px) in row.iter().enumerate() {
                let mut acc = value(px);
                if x > 0 {
                    acc += data[base + x - 1];
                }
                if y > 0 {
                    acc += data[base - width + x];
                }
                if x > 0 && y > 0 {
                    acc -= data[base - width + x - 1];
                }
                data[base + x] = acc;
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a table of plain gray levels.
    pub fn plain(src: ImageView<'_, u8>) -> GrayAreaResult<Self> {
        Self::build(src, u64::from)
    }

    /// Builds a table of squared gray levels.
    pub fn quadratic(src: ImageView<'_, u8>) -> GrayAreaResult<Self> {
        Self::build(src, |v| {
            let v = u64::from(v);
            v * v
        })
    }

    /// Returns the table width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the table height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the inclusive prefix sum at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the table.
    pub fn at(&self, x: usize, y: usize) -> u64 {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} table",
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Sums the source over the inclusive rectangle `[x0, x1] x [y0, y1]`.
    ///
    /// # Panics
    /// Panics unless `x0 <= x1 < width` and `y0 <= y1 < height`.
    pub fn rect_sum(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        assert!(
            x0 <= x1 && x1 < self.width && y0 <= y1 && y1 < self.height,
            "rect [{x0}, {x1}]x[{y0}, {y1}] outside {}x{} table",
            self.width,
            self.height
        );
        let w = self.width;
        let mut sum = self.data[y1 * w + x1];
        if x0 > 0 && y0 > 0 {
            sum += self.data[(y0 - 1) * w + x0 - 1];
        }
        if x0 > 0 {
            sum -= self.data[y1 * w + x0 - 1];
        }
        if y0 > 0 {
            sum -= self.data[(y0 - 1) * w + x1];
        }
        sum
    }

    /// Sums the whole source; zero for an empty table.
    pub fn total(&self) -> u64 {
        self.data.last().copied().unwrap_or(0)
    }
}
