//! Lens-likeness verdict.

use crate::config::DetectorConfig;

use super::features::PulseShape;

/// Decide whether a pulse shape matches a camera-lens retroreflection.
///
/// Pure function of the four derived features and the configured
/// thresholds: tall enough above baseline, narrow enough, rises fast
/// enough, falls fast enough. All four tests must pass.
pub fn classify(shape: &PulseShape, config: &DetectorConfig) -> bool {
    shape.height >= config.height_min
        && shape.width_ms <= config.width_max_ms
        && shape.rise_slope >= config.rise_min
        && -shape.fall_slope >= config.fall_min
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_shape() -> PulseShape {
        PulseShape {
            baseline: 2.0,
            height: 38.0,
            width_ms: 20.0,
            rise_slope: 3.8,
            fall_slope: -3.8,
        }
    }

    #[test]
    fn test_all_tests_pass() {
        assert!(classify(&passing_shape(), &DetectorConfig::default()));
    }

    #[test]
    fn test_too_short_fails() {
        let shape = PulseShape {
            height: 9.9,
            ..passing_shape()
        };
        assert!(!classify(&shape, &DetectorConfig::default()));
    }

    #[test]
    fn test_too_wide_fails() {
        let shape = PulseShape {
            width_ms: 180.1,
            ..passing_shape()
        };
        assert!(!classify(&shape, &DetectorConfig::default()));
    }

    #[test]
    fn test_slow_rise_fails() {
        let shape = PulseShape {
            rise_slope: 0.14,
            ..passing_shape()
        };
        assert!(!classify(&shape, &DetectorConfig::default()));
    }

    #[test]
    fn test_slow_fall_fails() {
        let shape = PulseShape {
            fall_slope: -0.14,
            ..passing_shape()
        };
        assert!(!classify(&shape, &DetectorConfig::default()));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let config = DetectorConfig::default();
        let shape = PulseShape {
            baseline: 0.0,
            height: config.height_min,
            width_ms: config.width_max_ms,
            rise_slope: config.rise_min,
            fall_slope: -config.fall_min,
        };
        assert!(classify(&shape, &config));
    }

    #[test]
    fn test_degenerate_shape_is_not_lens_like() {
        // Zero-width, zero-height shape from a flat or negative pulse.
        let shape = PulseShape {
            baseline: 7.0,
            height: 0.0,
            width_ms: 0.0,
            rise_slope: 0.0,
            fall_slope: 0.0,
        };
        assert!(!classify(&shape, &DetectorConfig::default()));
    }
}
