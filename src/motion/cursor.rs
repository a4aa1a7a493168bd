//! Cursor tracking - smoothed position, pinch pressure and velocity
//!
//! The target position updates only on frames with a detected hand; the
//! smoothed quantities decay toward their targets on every frame. Velocity
//! is the smoothed frame-to-frame delta of the smoothed position and feeds
//! secondary visual effects (tilt, stretch) only - the position used for
//! stroke segments never waits on it.

use crate::config::SessionConfig;
use crate::motion::smoother::{ExpSmoother, ExpSmoother2D};

/// Parking position used until the hand is first seen
pub const OFFSCREEN_PX: (f32, f32) = (-100.0, -100.0);

pub struct CursorTracker {
    target: (f32, f32),
    position: ExpSmoother2D,
    pinch: ExpSmoother,
    velocity: ExpSmoother2D,
    seen: bool,
}

impl CursorTracker {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            target: OFFSCREEN_PX,
            position: ExpSmoother2D::new(config.alpha_position, OFFSCREEN_PX),
            pinch: ExpSmoother::new(config.alpha_pinch, 0.0),
            velocity: ExpSmoother2D::new(config.alpha_velocity, (0.0, 0.0)),
            seen: false,
        }
    }

    /// Advance one frame.
    ///
    /// - `target_px`: raw index-tip position when a hand was interpreted this
    ///   frame; `None` holds the previous target (no snap-back).
    /// - `pinch_target`: raw pinch strength, 0 on hand-less frames.
    pub fn update(&mut self, target_px: Option<(f32, f32)>, pinch_target: f32) {
        let mut first_sight = false;
        if let Some(target) = target_px {
            self.target = target;
            if !self.seen {
                // First detection: start at the hand, not swooping in from
                // the off-screen parking position.
                self.position.snap(target);
                self.seen = true;
                first_sight = true;
            }
        }

        let previous = self.position.value();
        self.position.step(self.target);

        let delta = if first_sight {
            (0.0, 0.0)
        } else {
            let current = self.position.value();
            (current.0 - previous.0, current.1 - previous.1)
        };
        self.velocity.step(delta);

        self.pinch.step(pinch_target.clamp(0.0, 1.0));
    }

    /// Smoothed cursor position in screen pixels
    pub fn position(&self) -> (f32, f32) {
        self.position.value()
    }

    /// Raw (unsmoothed) target the cursor is converging toward
    pub fn target(&self) -> (f32, f32) {
        self.target
    }

    /// Smoothed pinch strength in [0, 1]
    pub fn pinch_strength(&self) -> f32 {
        self.pinch.value()
    }

    /// Smoothed per-frame movement delta
    pub fn velocity(&self) -> (f32, f32) {
        self.velocity.value()
    }

    /// Whether a hand has ever been detected this session
    pub fn seen(&self) -> bool {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> CursorTracker {
        CursorTracker::new(&SessionConfig::default())
    }

    #[test]
    fn test_offscreen_until_first_sight() {
        let mut cursor = tracker();
        for _ in 0..10 {
            cursor.update(None, 0.0);
        }
        assert_eq!(cursor.position(), OFFSCREEN_PX);
        assert!(!cursor.seen());
    }

    #[test]
    fn test_first_sight_snaps_to_hand() {
        let mut cursor = tracker();
        cursor.update(Some((500.0, 300.0)), 0.0);
        assert_eq!(cursor.position(), (500.0, 300.0));
        assert_eq!(cursor.velocity(), (0.0, 0.0));
        assert!(cursor.seen());
    }

    #[test]
    fn test_hand_loss_freezes_target() {
        let mut cursor = tracker();
        cursor.update(Some((500.0, 300.0)), 1.0);
        for _ in 0..200 {
            cursor.update(None, 0.0);
        }
        let settled = cursor.position();
        assert_eq!(settled, (500.0, 300.0));
        for _ in 0..100 {
            cursor.update(None, 0.0);
        }
        assert_eq!(cursor.position(), settled, "no drift while hand is lost");
    }

    #[test]
    fn test_pinch_decays_without_hand() {
        let mut cursor = tracker();
        cursor.update(Some((500.0, 300.0)), 1.0);
        for _ in 0..100 {
            cursor.update(None, 0.0);
        }
        assert!(cursor.pinch_strength() < 0.01);
    }

    #[test]
    fn test_position_converges_on_moved_target() {
        let mut cursor = tracker();
        cursor.update(Some((0.0, 0.0)), 0.0);
        for _ in 0..100 {
            cursor.update(Some((200.0, 100.0)), 0.0);
        }
        let (x, y) = cursor.position();
        assert!((x - 200.0).abs() < 0.1);
        assert!((y - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_velocity_tracks_motion_direction() {
        let mut cursor = tracker();
        cursor.update(Some((0.0, 0.0)), 0.0);
        for i in 1..20 {
            cursor.update(Some((i as f32 * 10.0, 0.0)), 0.0);
        }
        let (vx, vy) = cursor.velocity();
        assert!(vx > 0.0);
        assert!(vy.abs() < 0.5);
    }
}
