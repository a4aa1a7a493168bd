//! Frame pipeline - one tick per display refresh
//!
//! Wires interpreter -> smoother -> state machine -> composer in a strict
//! one-directional order; no stage holds a reference to a later one. Owns
//! every piece of mutable state for a session, so the wasm bridge stays a
//! thin shell and the whole pipeline runs under native tests.

use crate::bridge::landmarks::HandFrame;
use crate::config::{ConfigError, SessionConfig};
use crate::gesture::{
    interpret, FrameInput, GestureFlags, GestureStateMachine, PenPhase, SessionEvent, TapTracker,
};
use crate::motion::CursorTracker;
use crate::stroke::{Segment, StrokeBuffer, StrokeComposer};

/// What one tick produced for the presentation layer
#[derive(Clone, Copy, Debug)]
pub struct TickOutput {
    pub phase: PenPhase,
    /// Newly appended segment, if this frame extended a stroke
    pub segment: Option<Segment>,
    /// The stroke buffer was wiped this frame
    pub cleared: bool,
}

pub struct Pipeline {
    config: SessionConfig,
    viewport: (f32, f32),
    cursor: CursorTracker,
    machine: GestureStateMachine,
    composer: StrokeComposer,
    taps: TapTracker,
    events: Vec<SessionEvent>,
    /// Timestamp of the last processed frame, for stale-frame de-duplication
    last_timestamp_ms: f64,
    running: bool,
}

impl Pipeline {
    /// Build a pipeline for one session; rejects an invalid config before
    /// the frame loop ever starts.
    pub fn new(config: SessionConfig, width: f32, height: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport: (width, height),
            cursor: CursorTracker::new(&config),
            machine: GestureStateMachine::new(&config),
            composer: StrokeComposer::new(&config),
            taps: TapTracker::new(config.double_tap_ms),
            events: Vec::new(),
            last_timestamp_ms: f64::NEG_INFINITY,
            running: true,
        })
    }

    /// Queue a host input event for the next tick
    pub fn push_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Update the landmark-to-screen mapping after a viewport resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    /// Stop processing; subsequent ticks become no-ops
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame.
    ///
    /// `frame` is the hand detected for this timestamp, or `None`. A tick
    /// whose timestamp does not advance past the last processed one is
    /// skipped outright - the model has not produced new data.
    pub fn tick(&mut self, frame: Option<&HandFrame>, timestamp_ms: f64) -> TickOutput {
        if !self.running || timestamp_ms <= self.last_timestamp_ms {
            return TickOutput {
                phase: self.machine.phase(),
                segment: None,
                cleared: false,
            };
        }
        self.last_timestamp_ms = timestamp_ms;

        // Drain host events queued since the previous tick
        let mut tap_clear = false;
        for event in self.events.drain(..) {
            match event {
                SessionEvent::PointerDown { timestamp_ms } => {
                    tap_clear |= self.taps.register(timestamp_ms);
                }
            }
        }

        let (target, flags) = match frame {
            Some(frame) => {
                let interpretation = interpret(frame, self.viewport, &self.config);
                (Some(interpretation.target_px), interpretation.flags)
            }
            None => (None, GestureFlags::default()),
        };

        self.cursor.update(target, flags.pinch_strength);

        let input = FrameInput {
            hand_present: frame.is_some(),
            flags,
            smoothed_pinch: self.cursor.pinch_strength(),
            timestamp_ms,
            tap_clear,
        };
        let transition = self.machine.advance(&input);

        let segment = self.composer.compose(
            &transition,
            self.cursor.position(),
            self.cursor.pinch_strength(),
        );

        TickOutput {
            phase: transition.phase,
            segment,
            cleared: transition.cleared,
        }
    }

    // Read-side accessors for the presentation layer

    pub fn cursor_position(&self) -> (f32, f32) {
        self.cursor.position()
    }

    pub fn cursor_velocity(&self) -> (f32, f32) {
        self.cursor.velocity()
    }

    pub fn pinch_strength(&self) -> f32 {
        self.cursor.pinch_strength()
    }

    pub fn phase(&self) -> PenPhase {
        self.machine.phase()
    }

    pub fn pen_down(&self) -> bool {
        self.machine.pen_down()
    }

    pub fn paused_by_fist(&self) -> bool {
        self.machine.paused_by_fist()
    }

    pub fn strokes(&self) -> &StrokeBuffer {
        self.composer.buffer()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
