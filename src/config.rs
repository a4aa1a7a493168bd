//! Session configuration - gesture thresholds and smoothing coefficients
//!
//! All empirically tuned values live here rather than as magic numbers in
//! the pipeline. Validation runs once when the session is constructed; a
//! degenerate threshold is rejected up front, never patched mid-run.

use wasm_bindgen::prelude::*;

/// Thumb-index pixel distance at or below which pinch strength saturates at 1
const DEFAULT_PINCH_MIN_PX: f32 = 20.0;

/// Thumb-index pixel distance at or above which pinch strength reads 0
const DEFAULT_PINCH_MAX_PX: f32 = 140.0;

/// Mean fingertip-to-knuckle-centroid distance below which a fist is called
const DEFAULT_FIST_RADIUS_PX: f32 = 85.0;

/// Cursor position smoothing factor (higher = snappier, more jitter)
const DEFAULT_ALPHA_POSITION: f32 = 0.24;

/// Pinch strength smoothing factor
const DEFAULT_ALPHA_PINCH: f32 = 0.24;

/// Velocity smoothing factor (velocity drives tilt/stretch effects only)
const DEFAULT_ALPHA_VELOCITY: f32 = 0.35;

/// Smoothed pinch strength above which the pen goes down
const DEFAULT_PEN_DOWN_THRESHOLD: f32 = 0.55;

/// Minimum time between two canvas clears, shared by all clear triggers
const DEFAULT_CLEAR_COOLDOWN_MS: f64 = 1400.0;

/// Two pointer-downs within this window count as a double-tap
const DEFAULT_DOUBLE_TAP_MS: f64 = 300.0;

/// Stroke width with the pinch fully open
const DEFAULT_BASE_WIDTH_PX: f32 = 3.0;

/// Extra stroke width at full pinch strength
const DEFAULT_PRESSURE_GAIN_PX: f32 = 10.0;

/// When the pen is considered down for stroke composition
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Draw only while pinching (default)
    OnPinch,
    /// Legacy variant behavior: draw whenever the hand is visible and not fisted
    OnPresence,
}

/// Tunables for one drawing session
///
/// Plain public fields so the JS host can adjust values on the config object
/// before constructing the session. `mirror` is chosen once per session from
/// the camera facing (front cameras mirror) and applies to every
/// landmark-to-screen conversion.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub mirror: bool,
    pub pinch_min_px: f32,
    pub pinch_max_px: f32,
    pub fist_radius_px: f32,
    pub alpha_position: f32,
    pub alpha_pinch: f32,
    pub alpha_velocity: f32,
    pub pen_down_threshold: f32,
    pub clear_cooldown_ms: f64,
    pub double_tap_ms: f64,
    pub draw_mode: DrawMode,
    pub base_width_px: f32,
    pub pressure_gain_px: f32,
}

#[wasm_bindgen]
impl SessionConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SessionConfig {
        SessionConfig::default()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mirror: true,
            pinch_min_px: DEFAULT_PINCH_MIN_PX,
            pinch_max_px: DEFAULT_PINCH_MAX_PX,
            fist_radius_px: DEFAULT_FIST_RADIUS_PX,
            alpha_position: DEFAULT_ALPHA_POSITION,
            alpha_pinch: DEFAULT_ALPHA_PINCH,
            alpha_velocity: DEFAULT_ALPHA_VELOCITY,
            pen_down_threshold: DEFAULT_PEN_DOWN_THRESHOLD,
            clear_cooldown_ms: DEFAULT_CLEAR_COOLDOWN_MS,
            double_tap_ms: DEFAULT_DOUBLE_TAP_MS,
            draw_mode: DrawMode::OnPinch,
            base_width_px: DEFAULT_BASE_WIDTH_PX,
            pressure_gain_px: DEFAULT_PRESSURE_GAIN_PX,
        }
    }
}

impl SessionConfig {
    /// Check every tunable against its documented range.
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pinch_min_px.is_finite() || self.pinch_min_px < 0.0 {
            return Err(ConfigError::PinchMin(self.pinch_min_px));
        }
        if !self.pinch_max_px.is_finite() || self.pinch_max_px <= self.pinch_min_px {
            return Err(ConfigError::PinchBand {
                min: self.pinch_min_px,
                max: self.pinch_max_px,
            });
        }
        if !self.fist_radius_px.is_finite() || self.fist_radius_px <= 0.0 {
            return Err(ConfigError::FistRadius(self.fist_radius_px));
        }
        for (name, alpha) in [
            ("alpha_position", self.alpha_position),
            ("alpha_pinch", self.alpha_pinch),
            ("alpha_velocity", self.alpha_velocity),
        ] {
            if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
                return Err(ConfigError::SmoothingAlpha { name, value: alpha });
            }
        }
        if !self.pen_down_threshold.is_finite()
            || self.pen_down_threshold <= 0.0
            || self.pen_down_threshold >= 1.0
        {
            return Err(ConfigError::PenThreshold(self.pen_down_threshold));
        }
        if !self.clear_cooldown_ms.is_finite() || self.clear_cooldown_ms < 0.0 {
            return Err(ConfigError::ClearCooldown(self.clear_cooldown_ms));
        }
        if !self.double_tap_ms.is_finite() || self.double_tap_ms <= 0.0 {
            return Err(ConfigError::TapWindow(self.double_tap_ms));
        }
        if !self.base_width_px.is_finite() || self.base_width_px < 0.0 {
            return Err(ConfigError::StrokeWidth(self.base_width_px));
        }
        if !self.pressure_gain_px.is_finite() || self.pressure_gain_px < 0.0 {
            return Err(ConfigError::PressureGain(self.pressure_gain_px));
        }
        Ok(())
    }
}

/// Validation failures for a session configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    PinchMin(f32),
    PinchBand { min: f32, max: f32 },
    FistRadius(f32),
    SmoothingAlpha { name: &'static str, value: f32 },
    PenThreshold(f32),
    ClearCooldown(f64),
    TapWindow(f64),
    StrokeWidth(f32),
    PressureGain(f32),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::PinchMin(v) => {
                JsValue::from_str(&format!("pinch_min_px must be >= 0, got {}", v))
            }
            ConfigError::PinchBand { min, max } => JsValue::from_str(&format!(
                "pinch_max_px must exceed pinch_min_px, got {}..{}",
                min, max
            )),
            ConfigError::FistRadius(v) => {
                JsValue::from_str(&format!("fist_radius_px must be > 0, got {}", v))
            }
            ConfigError::SmoothingAlpha { name, value } => {
                JsValue::from_str(&format!("{} must be in (0, 1), got {}", name, value))
            }
            ConfigError::PenThreshold(v) => {
                JsValue::from_str(&format!("pen_down_threshold must be in (0, 1), got {}", v))
            }
            ConfigError::ClearCooldown(v) => {
                JsValue::from_str(&format!("clear_cooldown_ms must be >= 0, got {}", v))
            }
            ConfigError::TapWindow(v) => {
                JsValue::from_str(&format!("double_tap_ms must be > 0, got {}", v))
            }
            ConfigError::StrokeWidth(v) => {
                JsValue::from_str(&format!("base_width_px must be >= 0, got {}", v))
            }
            ConfigError::PressureGain(v) => {
                JsValue::from_str(&format!("pressure_gain_px must be >= 0, got {}", v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_pinch_band_rejected() {
        let mut config = SessionConfig::default();
        config.pinch_min_px = 140.0;
        config.pinch_max_px = 20.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PinchBand {
                min: 140.0,
                max: 20.0
            })
        );
    }

    #[test]
    fn test_equal_pinch_thresholds_rejected() {
        let mut config = SessionConfig::default();
        config.pinch_max_px = config.pinch_min_px;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_alpha_out_of_range_rejected() {
        let mut config = SessionConfig::default();
        config.alpha_position = 1.0;
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.alpha_pinch = 0.0;
        assert!(config.validate().is_err());

        let mut config = SessionConfig::default();
        config.alpha_velocity = -0.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_cooldown_rejected() {
        let mut config = SessionConfig::default();
        config.clear_cooldown_ms = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::ClearCooldown(-1.0)));
    }

    #[test]
    fn test_zero_cooldown_allowed() {
        let mut config = SessionConfig::default();
        config.clear_cooldown_ms = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pen_threshold_bounds_rejected() {
        let mut config = SessionConfig::default();
        config.pen_down_threshold = 1.0;
        assert!(config.validate().is_err());
        config.pen_down_threshold = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let mut config = SessionConfig::default();
        config.fist_radius_px = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_stroke_width_rejected() {
        let mut config = SessionConfig::default();
        config.base_width_px = -3.0;
        assert!(config.validate().is_err());
    }
}
