//! Per-peak shape descriptors.
//!
//! For each candidate, walks outward from the peak index to the half-maximum
//! crossing points and derives baseline, height, full-width-at-half-maximum,
//! and the rise/fall slopes. This routine is total: it always returns a
//! complete `PulseShape`, even when the numbers are degenerate (zero width,
//! non-positive height).

use crate::constants::SLOPE_EPSILON_MS;
use crate::series::Sample;

use super::peak_finder::PeakCandidate;

/// Shape of one candidate pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseShape {
    /// The lower of the two half-max crossing values; the valley the pulse
    /// rises out of and returns to
    pub baseline: f64,
    /// Peak value minus baseline (may be non-positive in degenerate cases)
    pub height: f64,
    /// Elapsed time between the two half-max crossings
    pub width_ms: f64,
    /// Height over rise time, non-negative
    pub rise_slope: f64,
    /// Signed fall rate, non-positive
    pub fall_slope: f64,
}

/// Locate the half-max crossings around `peak` and derive its shape.
///
/// Each walk stops at the first sample whose value drops to half the peak
/// value or below, or at the end of the series. A peak sitting on a series
/// boundary gets a zero-length walk on that side and the epsilon floor
/// governs the slope there. A non-positive peak value puts `half` at or
/// above the peak itself, so both walks stop immediately and the shape
/// degenerates to zero height and width; that is accepted behavior, not an
/// error.
pub fn extract_features(samples: &[Sample], peak: &PeakCandidate) -> PulseShape {
    let half = peak.value * 0.5;

    let mut left = peak.index;
    while left > 0 && samples[left].value > half {
        left -= 1;
    }

    let mut right = peak.index;
    while right < samples.len() - 1 && samples[right].value > half {
        right += 1;
    }

    let baseline = samples[left].value.min(samples[right].value);
    let height = peak.value - baseline;
    let width_ms = samples[right].t_ms - samples[left].t_ms;

    let rise_dt = (peak.t_ms - samples[left].t_ms).max(SLOPE_EPSILON_MS);
    let fall_dt = (samples[right].t_ms - peak.t_ms).max(SLOPE_EPSILON_MS);

    PulseShape {
        baseline,
        height,
        width_ms,
        rise_slope: height / rise_dt,
        fall_slope: (baseline - peak.value) / fall_dt,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn series(points: &[(f64, f64)]) -> Vec<Sample> {
        points
            .iter()
            .map(|&(t_ms, value)| Sample { t_ms, value })
            .collect()
    }

    fn candidate(samples: &[Sample], index: usize) -> PeakCandidate {
        PeakCandidate {
            index,
            t_ms: samples[index].t_ms,
            value: samples[index].value,
        }
    }

    #[test]
    fn test_worked_example() {
        let samples = series(&[(0.0, 0.0), (10.0, 2.0), (20.0, 40.0), (30.0, 3.0), (40.0, 1.0)]);
        let shape = extract_features(&samples, &candidate(&samples, 2));

        assert_relative_eq!(shape.baseline, 2.0);
        assert_relative_eq!(shape.height, 38.0);
        assert_relative_eq!(shape.width_ms, 20.0);
        assert_relative_eq!(shape.rise_slope, 3.8);
        assert_relative_eq!(shape.fall_slope, -3.8);
    }

    #[test]
    fn test_asymmetric_baseline_takes_the_minimum() {
        // Left crossing lands on 4.0, right crossing on 9.0.
        let samples = series(&[(0.0, 4.0), (10.0, 30.0), (20.0, 9.0)]);
        let shape = extract_features(&samples, &candidate(&samples, 1));

        assert_relative_eq!(shape.baseline, 4.0);
        assert_relative_eq!(shape.height, 26.0);
    }

    #[test]
    fn test_walk_continues_past_above_half_neighbors() {
        // Values 25 and 22 stay above half (20); crossings land two out.
        let samples = series(&[
            (0.0, 5.0),
            (10.0, 25.0),
            (20.0, 40.0),
            (30.0, 22.0),
            (40.0, 6.0),
        ]);
        let shape = extract_features(&samples, &candidate(&samples, 2));

        assert_relative_eq!(shape.baseline, 5.0);
        assert_relative_eq!(shape.width_ms, 40.0);
        assert_relative_eq!(shape.rise_slope, 35.0 / 20.0);
        assert_relative_eq!(shape.fall_slope, -35.0 / 20.0);
    }

    #[test]
    fn test_peak_at_left_boundary_uses_epsilon_floor() {
        let samples = series(&[(0.0, 40.0), (10.0, 3.0), (20.0, 1.0)]);
        let shape = extract_features(&samples, &candidate(&samples, 0));

        // Left walk cannot move; the crossing is the peak itself.
        assert_relative_eq!(shape.baseline, 3.0);
        assert_relative_eq!(shape.width_ms, 10.0);
        assert!(shape.rise_slope.is_finite());
        assert_relative_eq!(shape.rise_slope, 37.0 / SLOPE_EPSILON_MS);
        assert_relative_eq!(shape.fall_slope, -3.7);
    }

    #[test]
    fn test_peak_at_right_boundary_uses_epsilon_floor() {
        let samples = series(&[(0.0, 1.0), (10.0, 3.0), (20.0, 40.0)]);
        let shape = extract_features(&samples, &candidate(&samples, 2));

        assert_relative_eq!(shape.width_ms, 10.0);
        assert!(shape.fall_slope.is_finite());
        assert_relative_eq!(shape.fall_slope, -37.0 / SLOPE_EPSILON_MS);
    }

    #[test]
    fn test_single_sample_series_degenerates_cleanly() {
        let samples = series(&[(5.0, 12.0)]);
        let shape = extract_features(&samples, &candidate(&samples, 0));

        assert_relative_eq!(shape.baseline, 12.0);
        assert_relative_eq!(shape.height, 0.0);
        assert_relative_eq!(shape.width_ms, 0.0);
        assert!(shape.rise_slope.is_finite());
        assert!(shape.fall_slope.is_finite());
    }

    #[test]
    fn test_non_positive_peak_degenerates_cleanly() {
        let samples = series(&[(0.0, -5.0), (10.0, -1.0), (20.0, -4.0)]);
        let shape = extract_features(&samples, &candidate(&samples, 1));

        // half = -0.5 sits above the peak itself, so both walks stop
        // immediately at the peak index.
        assert_relative_eq!(shape.baseline, -1.0);
        assert_relative_eq!(shape.height, 0.0);
        assert_relative_eq!(shape.width_ms, 0.0);
        assert!(shape.rise_slope.is_finite());
        assert!(shape.fall_slope.is_finite());
    }

    #[test]
    fn test_duplicate_timestamp_at_crossing_hits_epsilon() {
        // The left crossing shares the peak's timestamp: rise_dt would be 0.
        let samples = series(&[(10.0, 2.0), (10.0, 40.0), (20.0, 3.0)]);
        let shape = extract_features(&samples, &candidate(&samples, 1));

        assert!(shape.rise_slope.is_finite());
        assert_relative_eq!(shape.rise_slope, 38.0 / SLOPE_EPSILON_MS);
    }
}
