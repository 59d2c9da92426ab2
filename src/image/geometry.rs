//! Geometric transforms and two-image compositing.
//!
//! Transforms that produce a new image allocate through `Graymap::new` and
//! leave the source untouched. Rectangles that do not fit are reported as
//! `RoiOutOfBounds`.

use crate::image::Graymap;
use crate::util::{GrayAreaError, GrayAreaResult};

impl Graymap {
    /// Returns a copy rotated 90 degrees anticlockwise.
    ///
    /// The result is `height x width`; source `(x, y)` lands at
    /// `(y, width - 1 - x)`.
    pub fn rotate(&self) -> GrayAreaResult<Graymap> {
        let mut out = Graymap::new(self.height(), self.width(), self.maxval())?;
        for (y, row) in self.view().rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                out.set(y, self.width() - 1 - x, v);
            }
        }
        Ok(out)
    }

    /// Returns a copy flipped left to right.
    pub fn mirror(&self) -> GrayAreaResult<Graymap> {
        let mut out = Graymap::new(self.width(), self.height(), self.maxval())?;
        for (y, row) in self.view().rows().enumerate() {
            let dst = out.row_mut(y);
            for (d, &s) in dst.iter_mut().zip(row.iter().rev()) {
                *d = s;
            }
        }
        Ok(out)
    }

    /// Copies the `w x h` rectangle with top-left corner `(x, y)`.
    pub fn crop(&self, x: usize, y: usize, w: usize, h: usize) -> GrayAreaResult<Graymap> {
        let roi = self.view().roi(x, y, w, h)?;
        Graymap::from_view(roi, self.maxval())
    }

    /// Writes `src` into this image with its top-left corner at `(x, y)`.
    ///
    /// Samples of `src` above this image's `maxval` are clamped to it.
    pub fn paste(&mut self, x: usize, y: usize, src: &Graymap) -> GrayAreaResult<()> {
        self.check_fits(x, y, src)?;
        let maxval = self.maxval();
        for (sy, row) in src.view().rows().enumerate() {
            let dst = &mut self.row_mut(y + sy)[x..x + src.width()];
            for (d, &s) in dst.iter_mut().zip(row) {
                *d = s.min(maxval);
            }
        }
        Ok(())
    }

    /// Blends `src` into this image at `(x, y)` with weight `alpha`.
    ///
    /// Each covered pixel becomes `dst * (1 - alpha) + src * alpha`, rounded
    /// and saturated to `[0, maxval]`. `alpha` outside `[0, 1]` is allowed.
    pub fn blend(&mut self, x: usize, y: usize, src: &Graymap, alpha: f64) -> GrayAreaResult<()> {
        self.check_fits(x, y, src)?;
        let maxval = f64::from(self.maxval());
        for (sy, row) in src.view().rows().enumerate() {
            let dst = &mut self.row_mut(y + sy)[x..x + src.width()];
            for (d, &s) in dst.iter_mut().zip(row) {
                let mixed = f64::from(*d) * (1.0 - alpha) + f64::from(s) * alpha;
                *d = (mixed + 0.5).floor().clamp(0.0, maxval) as u8;
            }
        }
        Ok(())
    }

    fn check_fits(&self, x: usize, y: usize, src: &Graymap) -> GrayAreaResult<()> {
        if self.valid_rect(x, y, src.width(), src.height()) {
            return Ok(());
        }
        Err(GrayAreaError::RoiOutOfBounds {
            x,
            y,
            width: src.width(),
            height: src.height(),
            img_width: self.width(),
            img_height: self.height(),
        })
    }
}
