//! Hand landmark frame - parsing and joint addressing
//!
//! Receives the MediaPipe hand landmarks that JavaScript forwards as a flat
//! Float32Array and turns them into a typed frame. A malformed array fails
//! closed to "no hand this frame"; the caller decides whether to warn.

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Joints per hand in the MediaPipe model
pub const LANDMARK_COUNT: usize = 21;

/// Expected flat array length: x, y, z per joint (z is carried by the model
/// but unused here)
pub const FLAT_LEN: usize = LANDMARK_COUNT * 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark point in normalized image coordinates
#[derive(Clone, Copy, Debug, Default)]
pub struct Landmark {
    /// 0-1 normalized, x grows rightward in the camera image
    pub x: f32,
    /// 0-1 normalized, y grows downward
    pub y: f32,
}

/// One detected hand for one frame
#[derive(Clone, Debug)]
pub struct HandFrame {
    pub landmarks: [Landmark; LANDMARK_COUNT],
    /// Monotonic host timestamp of the camera frame, in milliseconds
    pub timestamp_ms: f64,
}

impl HandFrame {
    /// Parse the flat x/y/z array from JavaScript.
    ///
    /// Returns `None` for any length other than [`FLAT_LEN`] - an empty
    /// slice means no hand was detected, anything else is a malformed frame
    /// and is treated the same way rather than indexed out of range.
    pub fn from_flat(data: &[f32], timestamp_ms: f64) -> Option<HandFrame> {
        if data.len() != FLAT_LEN {
            return None;
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (i, landmark) in landmarks.iter_mut().enumerate() {
            *landmark = Landmark {
                x: data[i * 3],
                y: data[i * 3 + 1],
            };
        }

        Some(HandFrame {
            landmarks,
            timestamp_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_frame() -> Vec<f32> {
        let mut data = Vec::with_capacity(FLAT_LEN);
        for i in 0..LANDMARK_COUNT {
            data.push(i as f32 * 0.01); // x
            data.push(i as f32 * 0.02); // y
            data.push(0.0); // z, ignored
        }
        data
    }

    #[test]
    fn test_parse_full_frame() {
        let frame = HandFrame::from_flat(&flat_frame(), 16.0).unwrap();
        assert_eq!(frame.timestamp_ms, 16.0);
        assert_eq!(frame.landmarks[INDEX_TIP].x, INDEX_TIP as f32 * 0.01);
        assert_eq!(frame.landmarks[PINKY_TIP].y, PINKY_TIP as f32 * 0.02);
    }

    #[test]
    fn test_empty_slice_is_no_hand() {
        assert!(HandFrame::from_flat(&[], 16.0).is_none());
    }

    #[test]
    fn test_short_frame_fails_closed() {
        let data = flat_frame();
        assert!(HandFrame::from_flat(&data[..30], 16.0).is_none());
    }

    #[test]
    fn test_overlong_frame_fails_closed() {
        let mut data = flat_frame();
        data.extend_from_slice(&[0.1, 0.2, 0.3]);
        assert!(HandFrame::from_flat(&data, 16.0).is_none());
    }
}
