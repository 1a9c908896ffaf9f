use super::{Formatter, bool_token};
use crate::detect::GlintFeatures;
use crate::error::Result;

pub const CSV_HEADER: &str =
    "t_ms,peak_value,baseline,height,width_ms,rise_slope,fall_slope,is_lens_like";

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    /// Floats use shortest round-trip formatting, so no precision is lost
    /// when the table is re-read for plotting or threshold tuning.
    fn format(&self, records: &[GlintFeatures]) -> Result<String> {
        let mut out = String::with_capacity(64 * (records.len() + 1));
        out.push_str(CSV_HEADER);
        out.push('\n');
        for r in records {
            out.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                r.t_ms,
                r.peak_value,
                r.baseline,
                r.height,
                r.width_ms,
                r.rise_slope,
                r.fall_slope,
                bool_token(r.is_lens_like)
            ));
        }
        Ok(out)
    }
}
