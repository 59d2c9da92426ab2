//! In-place per-pixel transforms.
//!
//! None of these change geometry or allocate, and none can fail.

use crate::image::Graymap;

impl Graymap {
    /// Returns the `(min, max)` gray levels, or `None` for an empty image.
    pub fn stats(&self) -> Option<(u8, u8)> {
        let mut samples = self.as_slice().iter().copied();
        let first = samples.next()?;
        Some(samples.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Replaces every level `v` by `maxval - v`.
    pub fn negate(&mut self) {
        let maxval = self.maxval();
        for v in self.as_mut_slice() {
            *v = maxval - *v;
        }
    }

    /// Maps levels below `thr` to black and the rest to `maxval`.
    pub fn threshold(&mut self, thr: u8) {
        let maxval = self.maxval();
        for v in self.as_mut_slice() {
            *v = if *v < thr { 0 } else { maxval };
        }
    }

    /// Multiplies every level by `factor`, rounding and saturating to
    /// `[0, maxval]`.
    pub fn brighten(&mut self, factor: f64) {
        let maxval = f64::from(self.maxval());
        for v in self.as_mut_slice() {
            let scaled = (f64::from(*v) * factor + 0.5).floor();
            *v = scaled.clamp(0.0, maxval) as u8;
        }
    }
}
