use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EYE_SPEED: f32 = 6.0;
pub const DEFAULT_RADIANS_PER_CURSOR_POINT: f32 = 0.017;
pub const DEFAULT_MAXIMUM_PITCH_RADIANS: f32 = FRAC_PI_2 * 0.98;

/// Camera tunables, loadable from a JSON file.
///
/// Missing fields fall back to their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub eye_speed: f32,
    pub radians_per_cursor_point: f32,
    pub maximum_pitch_radians: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye_speed: DEFAULT_EYE_SPEED,
            radians_per_cursor_point: DEFAULT_RADIANS_PER_CURSOR_POINT,
            maximum_pitch_radians: DEFAULT_MAXIMUM_PITCH_RADIANS,
        }
    }
}

impl CameraSettings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse camera settings")
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("Invalid camera settings in {}", path.display()))?;

        log::debug!("Loaded camera settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Reject values the camera math cannot handle
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.eye_speed.is_finite() || self.eye_speed < 0.0 {
            bail!("eye_speed must be finite and non-negative, got {}", self.eye_speed);
        }
        if !self.radians_per_cursor_point.is_finite() || self.radians_per_cursor_point < 0.0 {
            bail!(
                "radians_per_cursor_point must be finite and non-negative, got {}",
                self.radians_per_cursor_point
            );
        }
        if !(0.0..FRAC_PI_2).contains(&self.maximum_pitch_radians) {
            bail!(
                "maximum_pitch_radians must lie in [0, π/2), got {}",
                self.maximum_pitch_radians
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CameraSettings::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = CameraSettings::from_json(r#"{ "eye_speed": 12.0 }"#).unwrap();
        assert_eq!(settings.eye_speed, 12.0);
        assert_eq!(settings.radians_per_cursor_point, DEFAULT_RADIANS_PER_CURSOR_POINT);
        assert_eq!(settings.maximum_pitch_radians, DEFAULT_MAXIMUM_PITCH_RADIANS);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(CameraSettings::from_json("{}").unwrap(), CameraSettings::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(CameraSettings::from_json("{ eye_speed: }").is_err());
    }

    #[test]
    fn vertical_pitch_limit_is_rejected() {
        let settings = CameraSettings {
            maximum_pitch_radians: FRAC_PI_2,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("maximum_pitch_radians"));
    }

    #[test]
    fn negative_values_are_rejected() {
        let speed = CameraSettings {
            eye_speed: -1.0,
            ..Default::default()
        };
        assert!(speed.validate().is_err());

        let sensitivity = CameraSettings {
            radians_per_cursor_point: f32::NAN,
            ..Default::default()
        };
        assert!(sensitivity.validate().is_err());

        let pitch = CameraSettings {
            maximum_pitch_radians: -0.1,
            ..Default::default()
        };
        assert!(pitch.validate().is_err());
    }
}
