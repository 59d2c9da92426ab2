//! Box blur backed by a summed-area table.
//!
//! Each pixel `(x, y)` becomes the mean of `[x - dx, x + dx] x [y - dy, y + dy]`
//! clipped to the image, rounded half up: `(sum + count / 2) / count`. Near
//! the borders the window shrinks instead of padding or wrapping. The cost is
//! one table build plus four lookups per pixel, independent of window size.

use crate::image::Graymap;
use crate::integral::SummedAreaTable;
use crate::trace::trace_span;
use crate::util::math::{clip_span, rounded_mean};
use crate::util::GrayAreaResult;

/// Blurs `img` in place with a `(2 dx + 1) x (2 dy + 1)` mean filter.
///
/// All window sums come from a table built over the original levels, so no
/// output pixel depends on another pixel already rewritten in this pass.
pub fn box_blur(img: &mut Graymap, dx: usize, dy: usize) -> GrayAreaResult<()> {
    let _guard = trace_span!(
        "box_blur",
        width = img.width(),
        height = img.height(),
        dx = dx,
        dy = dy
    )
    .entered();

    if img.is_empty() {
        return Ok(());
    }

    let table = SummedAreaTable::plain(img.view())?;
    let width = img.width();
    let height = img.height();
    for y in 0..height {
        let (y0, y1) = clip_span(y, dy, height);
        let rows = (y1 - y0 + 1) as u64;
        let out = img.row_mut(y);
        for (x, px) in out.iter_mut().enumerate() {
            let (x0, x1) = clip_span(x, dx, width);
            let count = (x1 - x0 + 1) as u64 * rows;
            let sum = table.rect_sum(x0, y0, x1, y1);
            // A mean of levels in [0, maxval] stays in [0, maxval].
            *px = rounded_mean(sum, count) as u8;
        }
    }
    Ok(())
}

/// Returns a blurred copy of `img`, leaving the input untouched.
pub fn box_blurred(img: &Graymap, dx: usize, dy: usize) -> GrayAreaResult<Graymap> {
    let mut out = img.clone();
    box_blur(&mut out, dx, dy)?;
    Ok(out)
}
