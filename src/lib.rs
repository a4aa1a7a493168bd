//! airdraw-web - hand-gesture drawing in the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen startup hooks
//!
//! JavaScript owns the camera, the hand-landmark model and the canvas; this
//! crate turns the per-frame landmark stream into a smoothed cursor, gesture
//! flags and drawable stroke segments.

pub mod bridge;
pub mod config;
pub mod gesture;
pub mod motion;
pub mod pipeline;
pub mod stroke;

use wasm_bindgen::prelude::*;

// Re-export the JS-facing surface
pub use bridge::DrawSession;
pub use config::{DrawMode, SessionConfig};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
