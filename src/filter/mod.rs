//! Mean filtering over clipped rectangular windows.

mod blur;

pub use blur::{box_blur, box_blurred};
