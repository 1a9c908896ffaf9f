//! Configuration for the lens-glint detector.
//!
//! Thresholds were tuned by eye against bench captures of phone camera
//! lenses; widen or narrow the acceptance band by editing a TOML file or
//! passing CLI overrides. The config is an explicit value handed to the
//! pipeline, never global state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GlintError, Result};

/// Detection and classification thresholds.
///
/// A peak is reported at all only if it clears `noise_floor_height`; it is
/// classified as lens-like only if it passes all four shape tests.
///
/// # Example
/// ```
/// use lensglint::config::DetectorConfig;
///
/// let mut config = DetectorConfig::default();
/// config.width_max_ms = 120.0; // accept only narrower pulses
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Minimum height above local baseline to count as lens-like
    pub height_min: f64,
    /// Maximum full-width-at-half-maximum in milliseconds
    pub width_max_ms: f64,
    /// Minimum rise slope in diff units per millisecond
    pub rise_min: f64,
    /// Minimum fall-slope magnitude in diff units per millisecond
    pub fall_min: f64,
    /// Absolute minimum peak value considered a candidate, independent of
    /// the local baseline
    pub noise_floor_height: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            height_min: 10.0,
            width_max_ms: 180.0,
            rise_min: 0.15,
            fall_min: 0.15,
            noise_floor_height: 5.0,
        }
    }
}

impl DetectorConfig {
    /// Load thresholds from a TOML file.
    ///
    /// Every field is individually optional and falls back to its default;
    /// unknown keys are rejected so a misspelled threshold fails loudly.
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| GlintError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject threshold combinations the pipeline cannot interpret.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("height_min", self.height_min),
            ("width_max_ms", self.width_max_ms),
            ("rise_min", self.rise_min),
            ("fall_min", self.fall_min),
            ("noise_floor_height", self.noise_floor_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(GlintError::Config(format!("{} must be finite", name)));
            }
        }
        if self.width_max_ms < 0.0 {
            return Err(GlintError::Config(
                "width_max_ms must be non-negative".to_string(),
            ));
        }
        if self.rise_min < 0.0 || self.fall_min < 0.0 {
            return Err(GlintError::Config(
                "rise_min and fall_min must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
