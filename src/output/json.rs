use super::Formatter;
use crate::detect::GlintFeatures;
use crate::error::Result;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, records: &[GlintFeatures]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}
