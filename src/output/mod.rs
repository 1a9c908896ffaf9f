mod csv;
mod json;
mod text;

pub use self::csv::{CSV_HEADER, CsvFormatter};
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::detect::GlintFeatures;
use crate::error::Result;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Text,
    Json,
}

pub trait Formatter {
    /// Render the full classification table.
    fn format(&self, records: &[GlintFeatures]) -> Result<String>;
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Boolean tokens as the logging tooling downstream expects them.
pub(crate) fn bool_token(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
