// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use crate::settings::CameraSettings;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "First-person fly camera viewer", long_about = None)]
pub struct Cli {
    /// JSON file with camera settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// World units per second while a movement key is held
    #[arg(long)]
    pub eye_speed: Option<f32>,

    /// Radians of rotation per pointer unit
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Pitch limit away from the horizon, in degrees
    #[arg(long)]
    pub max_pitch_degrees: Option<f32>,

    /// Fixed camera update rate
    #[arg(long, default_value_t = 60.0)]
    pub hz: f32,

    /// Keep the window system's vertical pointer axis as is
    #[arg(long = "no-invert-y", default_value = "false")]
    pub no_invert_y: bool,
}

impl Cli {
    /// Settings file (or defaults) with command-line overrides on top
    pub fn resolve_settings(&self) -> anyhow::Result<CameraSettings> {
        let mut settings = match &self.config {
            Some(path) => CameraSettings::load(path)?,
            None => CameraSettings::default(),
        };

        if let Some(eye_speed) = self.eye_speed {
            settings.eye_speed = eye_speed;
        }
        if let Some(sensitivity) = self.sensitivity {
            settings.radians_per_cursor_point = sensitivity;
        }
        if let Some(degrees) = self.max_pitch_degrees {
            settings.maximum_pitch_radians = degrees.to_radians();
        }

        settings
            .validate()
            .context("Camera settings rejected")?;
        Ok(settings)
    }

    /// Fixed update rate, rejected unless finite and positive
    pub fn step_rate(&self) -> anyhow::Result<f32> {
        if !self.hz.is_finite() || self.hz <= 0.0 {
            bail!("--hz must be a finite rate above zero, got {}", self.hz);
        }
        Ok(self.hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["fly-camera"]);
        assert_eq!(cli.hz, 60.0);
        assert!(!cli.no_invert_y);
        assert_eq!(cli.resolve_settings().unwrap(), CameraSettings::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "fly-camera",
            "--eye-speed",
            "10",
            "--sensitivity",
            "0.005",
            "--max-pitch-degrees",
            "45",
            "--no-invert-y",
        ]);
        let settings = cli.resolve_settings().unwrap();

        assert_eq!(settings.eye_speed, 10.0);
        assert_eq!(settings.radians_per_cursor_point, 0.005);
        assert!((settings.maximum_pitch_radians - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert!(cli.no_invert_y);
    }

    #[test]
    fn steep_pitch_limit_fails_validation() {
        let cli = Cli::parse_from(["fly-camera", "--max-pitch-degrees", "95"]);
        assert!(cli.resolve_settings().is_err());
    }

    #[test]
    fn zero_step_rate_is_rejected() {
        let cli = Cli::parse_from(["fly-camera", "--hz", "0"]);
        let err = cli.step_rate().unwrap_err();
        assert!(err.to_string().contains("--hz"));
    }

    #[test]
    fn negative_and_infinite_step_rates_are_rejected() {
        let negative = Cli::parse_from(["fly-camera", "--hz=-30"]);
        assert!(negative.step_rate().is_err());

        let infinite = Cli::parse_from(["fly-camera", "--hz", "inf"]);
        assert!(infinite.step_rate().is_err());
    }

    #[test]
    fn positive_step_rate_is_accepted() {
        let cli = Cli::parse_from(["fly-camera", "--hz", "120"]);
        assert_eq!(cli.step_rate().unwrap(), 120.0);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["fly-camera", "--config", "/nonexistent/camera.json"]);
        let err = cli.resolve_settings().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/camera.json"));
    }
}
