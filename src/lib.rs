//! GrayArea is a gray-scale raster image library built on summed-area tables.
//!
//! A summed-area table answers any axis-aligned rectangle sum in constant
//! time after one linear pass over the image. The crate uses it for a
//! clipped-window box blur whose cost does not depend on the window size and
//! for an exact sub-image search that prunes placements by window statistics
//! before comparing pixels.

pub mod filter;
pub mod image;
pub mod integral;
pub mod lowlevel;
pub mod search;
mod trace;
pub mod util;

pub use filter::{box_blur, box_blurred};
pub use crate::image::{Graymap, ImageView};
pub use integral::SummedAreaTable;
pub use search::{locate, locate_with_config, matches_at, Match, MatchConfig, NeedleProfile};
pub use util::{GrayAreaError, GrayAreaResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
