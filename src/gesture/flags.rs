//! Landmark interpretation - semantic gesture quantities from raw joints
//!
//! Pure per-frame derivation: index-tip cursor target, pinch strength,
//! finger extension flags, fist and peace-sign classification. Same frame
//! and config in, same answer out - no hidden state.

use crate::bridge::landmarks::{
    HandFrame, Landmark, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_IP, THUMB_TIP,
};
use crate::config::SessionConfig;

/// Tip/proximal joint pairs for the extension heuristic, thumb first.
/// The thumb has no PIP; its IP joint plays the same role.
const FINGER_JOINTS: [(usize, usize); 5] = [
    (THUMB_TIP, THUMB_IP),
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Knuckles whose centroid anchors the fist test (thumb excluded - its MCP
/// sits too far toward the wrist to represent the palm)
const FIST_KNUCKLES: [usize; 4] = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// All five fingertips, measured against the knuckle centroid for the fist
const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Stateless gesture classification for one frame
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureFlags {
    /// 0 = fully open, 1 = fully pinched
    pub pinch_strength: f32,
    pub is_fist: bool,
    pub is_peace_sign: bool,
    /// Thumb, index, middle, ring, pinky
    pub fingers_extended: [bool; 5],
}

/// Interpreter output for one frame
#[derive(Clone, Copy, Debug)]
pub struct Interpretation {
    /// Raw index-tip cursor target in screen pixels (pre-smoothing)
    pub target_px: (f32, f32),
    pub flags: GestureFlags,
}

/// Map a normalized landmark to screen pixels, mirroring x for front cameras
fn to_screen(landmark: Landmark, viewport: (f32, f32), mirror: bool) -> (f32, f32) {
    let x = if mirror { 1.0 - landmark.x } else { landmark.x };
    (x * viewport.0, landmark.y * viewport.1)
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Interpret one hand frame against a viewport.
pub fn interpret(frame: &HandFrame, viewport: (f32, f32), config: &SessionConfig) -> Interpretation {
    let screen = |index: usize| to_screen(frame.landmarks[index], viewport, config.mirror);

    let target_px = screen(INDEX_TIP);

    // Pinch strength from the thumb-index pixel distance, clamped into the
    // configured band so out-of-range frames cannot leave the [0, 1] range.
    let pinch_distance = distance(screen(THUMB_TIP), screen(INDEX_TIP));
    let band = config.pinch_max_px - config.pinch_min_px;
    let pinch_strength = 1.0 - ((pinch_distance - config.pinch_min_px) / band).clamp(0.0, 1.0);

    // A finger is extended when its tip sits above its proximal joint in
    // image coordinates (y grows downward).
    let mut fingers_extended = [false; 5];
    for (finger, (tip, proximal)) in FINGER_JOINTS.iter().enumerate() {
        fingers_extended[finger] = frame.landmarks[*tip].y < frame.landmarks[*proximal].y;
    }

    let is_peace_sign = fingers_extended[1]
        && fingers_extended[2]
        && !fingers_extended[3]
        && !fingers_extended[4];

    // Fist: every fingertip has curled in toward the palm, measured as the
    // mean fingertip distance to the knuckle centroid.
    let mut centroid = (0.0, 0.0);
    for knuckle in FIST_KNUCKLES {
        let p = screen(knuckle);
        centroid.0 += p.0;
        centroid.1 += p.1;
    }
    centroid.0 /= FIST_KNUCKLES.len() as f32;
    centroid.1 /= FIST_KNUCKLES.len() as f32;

    let mut tip_spread = 0.0;
    for tip in FINGERTIPS {
        tip_spread += distance(screen(tip), centroid);
    }
    tip_spread /= FINGERTIPS.len() as f32;
    let is_fist = tip_spread < config.fist_radius_px;

    Interpretation {
        target_px,
        flags: GestureFlags {
            pinch_strength,
            is_fist,
            is_peace_sign,
            fingers_extended,
        },
    }
}
