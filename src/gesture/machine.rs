//! Gesture state machine - pen phases, fist pause and clear cooldown
//!
//! One transition per frame, precedence order fixed: hand loss, then fist,
//! then the pinch threshold. A closed fist can spuriously read as a short
//! thumb-index distance, so the fist check must run before the pinch check.

use crate::config::SessionConfig;
use crate::gesture::flags::GestureFlags;

/// Discrete interaction phase, re-evaluated every frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PenPhase {
    /// No hand detected
    Idle,
    /// Hand visible, not pinching, not fisted
    Open,
    /// Pen down
    Pinching,
    /// Fist held - drawing suspended
    Paused,
}

impl PenPhase {
    pub fn name(&self) -> &'static str {
        match self {
            PenPhase::Idle => "IDLE",
            PenPhase::Open => "OPEN",
            PenPhase::Pinching => "PINCHING",
            PenPhase::Paused => "PAUSED",
        }
    }
}

/// Everything the transition function sees for one frame
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub hand_present: bool,
    pub flags: GestureFlags,
    /// Post-smoothing pinch strength; the pen threshold applies to this,
    /// not to the raw per-frame value
    pub smoothed_pinch: f32,
    pub timestamp_ms: f64,
    /// A double-tap was recognized from queued pointer events this frame
    pub tap_clear: bool,
}

/// Result of one transition step
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    pub phase: PenPhase,
    pub pen_down: bool,
    /// A clear event fired this frame (cooldown already applied)
    pub cleared: bool,
}

/// Pure phase selection, first match wins
pub fn next_phase(input: &FrameInput, pen_down_threshold: f32) -> PenPhase {
    if !input.hand_present {
        return PenPhase::Idle;
    }
    if input.flags.is_fist {
        return PenPhase::Paused;
    }
    if input.smoothed_pinch > pen_down_threshold {
        PenPhase::Pinching
    } else {
        PenPhase::Open
    }
}

pub struct GestureStateMachine {
    phase: PenPhase,
    /// Timestamp of the last clear event; -inf so the first clear always fires
    last_clear_ms: f64,
    pen_down_threshold: f32,
    clear_cooldown_ms: f64,
}

impl GestureStateMachine {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            phase: PenPhase::Idle,
            last_clear_ms: f64::NEG_INFINITY,
            pen_down_threshold: config.pen_down_threshold,
            clear_cooldown_ms: config.clear_cooldown_ms,
        }
    }

    /// Advance one frame.
    ///
    /// The clear decision is independent of the phase transition: peace-sign
    /// and double-tap share one cooldown window, and a trigger inside the
    /// window is dropped, not deferred.
    pub fn advance(&mut self, input: &FrameInput) -> Transition {
        self.phase = next_phase(input, self.pen_down_threshold);

        let wants_clear = (input.hand_present && input.flags.is_peace_sign) || input.tap_clear;
        let mut cleared = false;
        if wants_clear && input.timestamp_ms - self.last_clear_ms > self.clear_cooldown_ms {
            self.last_clear_ms = input.timestamp_ms;
            cleared = true;
        }

        Transition {
            phase: self.phase,
            pen_down: self.phase == PenPhase::Pinching,
            cleared,
        }
    }

    pub fn phase(&self) -> PenPhase {
        self.phase
    }

    pub fn pen_down(&self) -> bool {
        self.phase == PenPhase::Pinching
    }

    pub fn paused_by_fist(&self) -> bool {
        self.phase == PenPhase::Paused
    }

    pub fn last_clear_ms(&self) -> f64 {
        self.last_clear_ms
    }

    /// Back to the idle state with the cooldown re-armed
    pub fn reset(&mut self) {
        self.phase = PenPhase::Idle;
        self.last_clear_ms = f64::NEG_INFINITY;
    }
}
