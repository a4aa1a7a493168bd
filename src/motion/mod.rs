//! Motion module - jitter suppression for cursor and pinch
//!
//! Re-exports only. All logic in submodules.

mod cursor;
mod smoother;

pub use cursor::{CursorTracker, OFFSCREEN_PX};
pub use smoother::{ExpSmoother, ExpSmoother2D};
