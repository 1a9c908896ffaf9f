pub mod config;
pub mod constants;
pub mod detect;
pub mod error;
pub mod output;
pub mod series;

pub use config::DetectorConfig;
pub use detect::{GlintFeatures, analyze};
pub use error::{GlintError, Result};
pub use series::{Sample, load_series};
