//! Stroke composition - segments from consecutive cursor positions
//!
//! While the draw condition holds, each frame connects the previous smoothed
//! position to the current one with a pressure-weighted width. Leaving the
//! draw condition for even one frame drops the previous-point reference, so
//! the next stroke starts disconnected.

use crate::config::{DrawMode, SessionConfig};
use crate::gesture::{PenPhase, Transition};
use crate::stroke::buffer::{Segment, StrokeBuffer};

pub struct StrokeComposer {
    buffer: StrokeBuffer,
    /// End point of the last composed segment, if the current stroke is live
    previous: Option<(f32, f32)>,
    mode: DrawMode,
    base_width_px: f32,
    pressure_gain_px: f32,
}

impl StrokeComposer {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            buffer: StrokeBuffer::new(),
            previous: None,
            mode: config.draw_mode,
            base_width_px: config.base_width_px,
            pressure_gain_px: config.pressure_gain_px,
        }
    }

    fn draws_in(&self, phase: PenPhase) -> bool {
        match self.mode {
            DrawMode::OnPinch => phase == PenPhase::Pinching,
            // Legacy variants draw whenever the hand is visible; the fist
            // pause and hand loss still lift the pen.
            DrawMode::OnPresence => matches!(phase, PenPhase::Open | PenPhase::Pinching),
        }
    }

    /// Compose this frame's segment, if any.
    ///
    /// A clear event empties the buffer before anything else; the first frame
    /// of a new stroke records the point without emitting a segment.
    pub fn compose(
        &mut self,
        transition: &Transition,
        position: (f32, f32),
        pinch_strength: f32,
    ) -> Option<Segment> {
        if transition.cleared {
            self.buffer.clear();
            self.previous = None;
        }

        if !self.draws_in(transition.phase) {
            self.previous = None;
            return None;
        }

        let width = (self.base_width_px + self.pressure_gain_px * pinch_strength.clamp(0.0, 1.0))
            .max(0.0);

        match self.previous.replace(position) {
            Some(start) => {
                let segment = Segment {
                    start,
                    end: position,
                    width,
                };
                self.buffer.push(segment);
                Some(segment)
            }
            None => None,
        }
    }

    pub fn buffer(&self) -> &StrokeBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer(mode: DrawMode) -> StrokeComposer {
        let mut config = SessionConfig::default();
        config.draw_mode = mode;
        StrokeComposer::new(&config)
    }

    fn drawing(phase: PenPhase) -> Transition {
        Transition {
            phase,
            pen_down: phase == PenPhase::Pinching,
            cleared: false,
        }
    }

    #[test]
    fn test_first_frame_records_without_segment() {
        let mut composer = composer(DrawMode::OnPinch);
        let out = composer.compose(&drawing(PenPhase::Pinching), (10.0, 10.0), 1.0);
        assert!(out.is_none());
        assert!(composer.buffer().is_empty());
    }

    #[test]
    fn test_second_frame_emits_segment() {
        let mut composer = composer(DrawMode::OnPinch);
        composer.compose(&drawing(PenPhase::Pinching), (10.0, 10.0), 1.0);
        let out = composer.compose(&drawing(PenPhase::Pinching), (20.0, 15.0), 1.0);
        let segment = out.unwrap();
        assert_eq!(segment.start, (10.0, 10.0));
        assert_eq!(segment.end, (20.0, 15.0));
        assert_eq!(composer.buffer().len(), 1);
    }

    #[test]
    fn test_width_follows_pinch_pressure() {
        let mut composer = composer(DrawMode::OnPinch);
        composer.compose(&drawing(PenPhase::Pinching), (0.0, 0.0), 0.0);
        let light = composer
            .compose(&drawing(PenPhase::Pinching), (1.0, 0.0), 0.0)
            .unwrap();
        let heavy = composer
            .compose(&drawing(PenPhase::Pinching), (2.0, 0.0), 1.0)
            .unwrap();
        assert_eq!(light.width, 3.0);
        assert_eq!(heavy.width, 13.0);
    }

    #[test]
    fn test_out_of_range_pressure_is_clamped() {
        let mut composer = composer(DrawMode::OnPinch);
        composer.compose(&drawing(PenPhase::Pinching), (0.0, 0.0), 0.0);
        let segment = composer
            .compose(&drawing(PenPhase::Pinching), (1.0, 0.0), 7.5)
            .unwrap();
        assert_eq!(segment.width, 13.0);
    }

    #[test]
    fn test_open_frame_breaks_stroke() {
        let mut composer = composer(DrawMode::OnPinch);
        composer.compose(&drawing(PenPhase::Pinching), (0.0, 0.0), 1.0);
        composer.compose(&drawing(PenPhase::Pinching), (10.0, 0.0), 1.0);
        composer.compose(&drawing(PenPhase::Open), (20.0, 0.0), 0.0);
        let out = composer.compose(&drawing(PenPhase::Pinching), (30.0, 0.0), 1.0);
        assert!(out.is_none(), "first frame after a break starts a new stroke");
        let resumed = composer
            .compose(&drawing(PenPhase::Pinching), (40.0, 0.0), 1.0)
            .unwrap();
        assert_eq!(resumed.start, (30.0, 0.0));
        assert_eq!(composer.buffer().len(), 2);
    }

    #[test]
    fn test_pause_breaks_stroke() {
        let mut composer = composer(DrawMode::OnPinch);
        composer.compose(&drawing(PenPhase::Pinching), (0.0, 0.0), 1.0);
        composer.compose(&drawing(PenPhase::Pinching), (10.0, 0.0), 1.0);
        composer.compose(&drawing(PenPhase::Paused), (10.0, 0.0), 1.0);
        assert!(composer
            .compose(&drawing(PenPhase::Pinching), (10.0, 0.0), 1.0)
            .is_none());
    }

    #[test]
    fn test_clear_wipes_buffer_and_breaks_stroke() {
        let mut composer = composer(DrawMode::OnPinch);
        composer.compose(&drawing(PenPhase::Pinching), (0.0, 0.0), 1.0);
        composer.compose(&drawing(PenPhase::Pinching), (10.0, 0.0), 1.0);

        let mut transition = drawing(PenPhase::Pinching);
        transition.cleared = true;
        let out = composer.compose(&transition, (20.0, 0.0), 1.0);
        assert!(out.is_none());
        assert!(composer.buffer().is_empty());
    }

    #[test]
    fn test_presence_mode_draws_while_open() {
        let mut composer = composer(DrawMode::OnPresence);
        composer.compose(&drawing(PenPhase::Open), (0.0, 0.0), 0.0);
        let out = composer.compose(&drawing(PenPhase::Open), (5.0, 5.0), 0.0);
        assert!(out.is_some());
    }

    #[test]
    fn test_presence_mode_still_pauses_on_fist() {
        let mut composer = composer(DrawMode::OnPresence);
        composer.compose(&drawing(PenPhase::Open), (0.0, 0.0), 0.0);
        composer.compose(&drawing(PenPhase::Paused), (5.0, 5.0), 0.0);
        assert!(composer
            .compose(&drawing(PenPhase::Open), (10.0, 10.0), 0.0)
            .is_none());
    }
}
