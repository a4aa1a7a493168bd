//! Host input events - explicit values consumed by the tick
//!
//! Pointer input arrives as queued event objects rather than callbacks
//! mutating shared state; the pipeline drains the queue synchronously at the
//! top of each tick, which keeps the transition logic pure and testable.

/// An input event queued on the session between ticks
#[derive(Clone, Copy, Debug)]
pub enum SessionEvent {
    PointerDown { timestamp_ms: f64 },
}

/// Double-tap detector
///
/// Two pointer-downs within the window fire once; the third tap of a fast
/// triple starts a fresh pair instead of firing again.
pub struct TapTracker {
    window_ms: f64,
    last_tap_ms: Option<f64>,
}

impl TapTracker {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_tap_ms: None,
        }
    }

    /// Register one pointer-down; returns true when it completes a double-tap
    pub fn register(&mut self, timestamp_ms: f64) -> bool {
        match self.last_tap_ms {
            Some(previous) if timestamp_ms - previous <= self.window_ms => {
                self.last_tap_ms = None;
                true
            }
            _ => {
                self.last_tap_ms = Some(timestamp_ms);
                false
            }
        }
    }
}
