//! Pipeline orchestration: finder, feature extraction, classification.
//!
//! Each peak's processing reads only the shared immutable sample slice and
//! its own candidate, so records are independent of one another and come
//! out in ascending time order because candidates do.

use serde::Serialize;

use crate::config::DetectorConfig;
use crate::series::Sample;

use super::{classify, extract_features, find_peaks};

/// One output record per detected peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlintFeatures {
    pub t_ms: f64,
    pub peak_value: f64,
    pub baseline: f64,
    pub height: f64,
    pub width_ms: f64,
    pub rise_slope: f64,
    pub fall_slope: f64,
    pub is_lens_like: bool,
}

/// Run the full detection pipeline over a sorted series.
pub fn analyze(samples: &[Sample], config: &DetectorConfig) -> Vec<GlintFeatures> {
    find_peaks(samples, config.noise_floor_height)
        .iter()
        .map(|peak| {
            let shape = extract_features(samples, peak);
            GlintFeatures {
                t_ms: peak.t_ms,
                peak_value: peak.value,
                baseline: shape.baseline,
                height: shape.height,
                width_ms: shape.width_ms,
                rise_slope: shape.rise_slope,
                fall_slope: shape.fall_slope,
                is_lens_like: classify(&shape, config),
            }
        })
        .collect()
}
