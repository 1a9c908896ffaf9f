pub mod classifier;
pub mod features;
pub mod peak_finder;
pub mod pipeline;

pub use classifier::classify;
pub use features::{PulseShape, extract_features};
pub use peak_finder::{PeakCandidate, find_peaks};
pub use pipeline::{GlintFeatures, analyze};
