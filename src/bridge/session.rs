//! Draw session - the JS-owned entry point for the frame loop
//!
//! JavaScript constructs one session after camera/model startup succeeds,
//! then calls `tick` once per animation frame and reads the outputs back to
//! render. The session owns all core state explicitly; nothing lives in
//! module-level storage.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::bridge::landmarks::{HandFrame, FLAT_LEN};
use crate::config::SessionConfig;
use crate::gesture::SessionEvent;
use crate::pipeline::Pipeline;
use crate::stroke::Segment;

// ============================================================================
// SESSION
// ============================================================================

#[wasm_bindgen]
pub struct DrawSession {
    pipeline: Pipeline,
    last_segment: Option<Segment>,
    clear_pending: bool,
}

#[wasm_bindgen]
impl DrawSession {
    /// Build a session for the given viewport. Fails with a descriptive
    /// message when the config holds a degenerate threshold.
    #[wasm_bindgen(constructor)]
    pub fn new(config: SessionConfig, width: f32, height: f32) -> Result<DrawSession, JsValue> {
        let pipeline = Pipeline::new(config, width, height).map_err(JsValue::from)?;
        console::log_1(&"✏️ Draw session ready".into());
        Ok(DrawSession {
            pipeline,
            last_segment: None,
            clear_pending: false,
        })
    }

    /// Advance one frame.
    ///
    /// - `flat`: 63 floats (x, y, z per joint) when a hand was detected this
    ///   frame, or an empty array when not.
    /// - `timestamp_ms`: monotonic frame timestamp from the host.
    pub fn tick(&mut self, flat: &[f32], timestamp_ms: f64) {
        let frame = HandFrame::from_flat(flat, timestamp_ms);
        if frame.is_none() && !flat.is_empty() {
            console::warn_1(
                &format!(
                    "Invalid landmark data length: {} (expected {})",
                    flat.len(),
                    FLAT_LEN
                )
                .into(),
            );
        }

        let output = self.pipeline.tick(frame.as_ref(), timestamp_ms);
        self.last_segment = output.segment;
        self.clear_pending |= output.cleared;
    }

    /// Queue a pointer-down event; a double-tap clears the canvas
    pub fn pointer_down(&mut self, timestamp_ms: f64) {
        self.pipeline
            .push_event(SessionEvent::PointerDown { timestamp_ms });
    }

    /// Update the landmark-to-screen mapping after a window resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.pipeline.resize(width, height);
    }

    /// Stop the loop; every later tick is a no-op
    pub fn stop(&mut self) {
        self.pipeline.stop();
    }

    pub fn is_running(&self) -> bool {
        self.pipeline.is_running()
    }

    // ========================================================================
    // RENDER OUTPUTS
    // ========================================================================

    pub fn cursor_x(&self) -> f32 {
        self.pipeline.cursor_position().0
    }

    pub fn cursor_y(&self) -> f32 {
        self.pipeline.cursor_position().1
    }

    pub fn velocity_x(&self) -> f32 {
        self.pipeline.cursor_velocity().0
    }

    pub fn velocity_y(&self) -> f32 {
        self.pipeline.cursor_velocity().1
    }

    pub fn pinch_strength(&self) -> f32 {
        self.pipeline.pinch_strength()
    }

    /// Current phase label: IDLE, OPEN, PINCHING or PAUSED
    pub fn phase_name(&self) -> String {
        self.pipeline.phase().name().to_string()
    }

    pub fn pen_down(&self) -> bool {
        self.pipeline.pen_down()
    }

    pub fn paused_by_fist(&self) -> bool {
        self.pipeline.paused_by_fist()
    }

    /// Segment appended by the last tick as [x0, y0, x1, y1, width];
    /// empty when the last tick drew nothing
    pub fn last_segment(&self) -> Vec<f32> {
        match self.last_segment {
            Some(segment) => vec![
                segment.start.0,
                segment.start.1,
                segment.end.0,
                segment.end.1,
                segment.width,
            ],
            None => Vec::new(),
        }
    }

    /// True once after a clear event; reading consumes the signal
    pub fn take_clear(&mut self) -> bool {
        std::mem::take(&mut self.clear_pending)
    }

    /// Entire stroke buffer flattened, for full-canvas repaints
    pub fn segments_flat(&self) -> Vec<f32> {
        self.pipeline.strokes().as_flat()
    }

    pub fn segment_count(&self) -> usize {
        self.pipeline.strokes().len()
    }
}
