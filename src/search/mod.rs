//! Exact sub-image search.
//!
//! `locate` finds the first placement of a needle inside a haystack where
//! every pixel agrees. Summed-area tables over both images prune almost all
//! placements in constant or linear time before any pixel is compared. All
//! tables are built per call and dropped on return.

mod plan;
mod scan;

pub use plan::NeedleProfile;
pub use scan::matches_at;

use crate::util::GrayAreaResult;
use crate::ImageView;

/// Location of an exact needle occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// X coordinate of the needle's top-left corner in the haystack.
    pub x: usize,
    /// Y coordinate of the needle's top-left corner in the haystack.
    pub y: usize,
}

/// Configuration for the pruning stages of `locate_with_config`.
///
/// Disabling a stage never changes the result, only the amount of exact
/// comparison work.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Reject windows whose sum or sum of squares differs from the needle's.
    pub moment_filter: bool,
    /// Reject windows whose column or row sums differ from the needle's.
    pub projection_filter: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            moment_filter: true,
            projection_filter: true,
        }
    }
}

/// Locates `needle` inside `haystack` with the default configuration.
///
/// Returns the top-left corner of the first occurrence, ordering candidates
/// by bottom-right corner in raster order. A needle larger than the haystack
/// in either axis is never found; an empty needle matches at `(0, 0)`.
pub fn locate(
    haystack: ImageView<'_, u8>,
    needle: ImageView<'_, u8>,
) -> GrayAreaResult<Option<Match>> {
    locate_with_config(haystack, needle, &MatchConfig::default())
}

/// Locates `needle` inside `haystack` using the given pruning stages.
pub fn locate_with_config(
    haystack: ImageView<'_, u8>,
    needle: ImageView<'_, u8>,
    cfg: &MatchConfig,
) -> GrayAreaResult<Option<Match>> {
    scan::locate_staged(haystack, needle, cfg)
}
