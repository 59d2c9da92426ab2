//! Low-level building blocks for custom pipelines.
//!
//! These expose the summed-area table, needle statistics, and the exact
//! comparison stage for callers that want to reuse tables across queries
//! instead of going through `locate` and `box_blur`.

pub use crate::integral::SummedAreaTable;
pub use crate::search::{matches_at, NeedleProfile};
