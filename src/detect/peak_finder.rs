//! Candidate peak detection.
//!
//! Scans the sorted series for local maxima that clear an absolute noise
//! floor. The floor is intentionally permissive so real spikes are not
//! missed; the baseline-relative height test happens later in the
//! classifier.

use crate::series::Sample;

/// A local maximum that cleared the noise floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakCandidate {
    /// Index into the sample slice
    pub index: usize,
    /// Capture time of the peak sample
    pub t_ms: f64,
    /// Signal value at the peak
    pub value: f64,
}

/// Find all local maxima whose value strictly exceeds `noise_floor`.
///
/// A maximal run of equal-valued samples counts as a single peak when both
/// flanking samples are lower; the run's leftmost index is reported. Runs
/// that touch either end of the series have no neighbor on that side and
/// are never reported.
///
/// An empty or all-below-floor series yields an empty vector; that is a
/// valid result, not an error.
pub fn find_peaks(samples: &[Sample], noise_floor: f64) -> Vec<PeakCandidate> {
    let mut peaks = Vec::new();
    if samples.len() < 3 {
        return peaks;
    }

    let mut start = 0;
    while start < samples.len() {
        let value = samples[start].value;

        // Extend over a plateau of equal values.
        let mut end = start;
        while end + 1 < samples.len() && samples[end + 1].value == value {
            end += 1;
        }

        if start > 0
            && end < samples.len() - 1
            && samples[start - 1].value <= value
            && samples[end + 1].value <= value
            && value > noise_floor
        {
            peaks.push(PeakCandidate {
                index: start,
                t_ms: samples[start].t_ms,
                value,
            });
        }

        start = end + 1;
    }
    peaks
}
