//! Needle statistics precomputed once per search.

use crate::image::ImageView;
use crate::integral::SummedAreaTable;
use crate::util::GrayAreaResult;

/// Aggregate statistics of a needle image used by the pruning stages.
///
/// All values derive from the needle's plain and quadratic summed-area
/// tables, which are dropped once the profile is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeedleProfile {
    width: usize,
    height: usize,
    sum: u64,
    sum_sq: u64,
    col_sums: Vec<u64>,
    row_sums: Vec<u64>,
}

impl NeedleProfile {
    /// Builds a profile from a needle view.
    pub fn from_view(needle: ImageView<'_, u8>) -> GrayAreaResult<Self> {
        let width = needle.width();
        let height = needle.height();
        let plain = SummedAreaTable::plain(needle)?;
        let quadratic = SummedAreaTable::quadratic(needle)?;

        let (col_sums, row_sums) = if needle.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            let last_x = width - 1;
            let last_y = height - 1;
            let cols = (0..width).map(|x| plain.rect_sum(x, 0, x, last_y)).collect();
            let rows = (0..height).map(|y| plain.rect_sum(0, y, last_x, y)).collect();
            (cols, rows)
        };

        Ok(Self {
            width,
            height,
            sum: plain.total(),
            sum_sq: quadratic.total(),
            col_sums,
            row_sums,
        })
    }

    /// Returns the needle width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the needle height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the sum of all needle levels.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Returns the sum of all squared needle levels.
    pub fn sum_sq(&self) -> u64 {
        self.sum_sq
    }

    /// Returns the per-column level sums, left to right.
    pub fn col_sums(&self) -> &[u64] {
        &self.col_sums
    }

    /// Returns the per-row level sums, top to bottom.
    pub fn row_sums(&self) -> &[u64] {
        &self.row_sums
    }
}
