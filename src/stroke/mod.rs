//! Stroke module - drawn-segment accumulation
//!
//! Re-exports only. All logic in submodules.

mod buffer;
mod composer;

pub use buffer::{Segment, StrokeBuffer, SEGMENT_STRIDE};
pub use composer::StrokeComposer;
