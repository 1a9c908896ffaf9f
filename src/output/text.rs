use super::Formatter;
use crate::detect::GlintFeatures;
use crate::error::Result;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, records: &[GlintFeatures]) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!(
            "{:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>6}\n",
            "t_ms", "peak", "baseline", "height", "width_ms", "rise", "fall", "lens"
        ));
        out.push_str(&format!("{}\n", "-".repeat(85)));

        for r in records {
            out.push_str(&format!(
                "{:>12.1} {:>10.2} {:>10.2} {:>10.2} {:>10.1} {:>10.3} {:>10.3} {:>6}\n",
                r.t_ms,
                r.peak_value,
                r.baseline,
                r.height,
                r.width_ms,
                r.rise_slope,
                r.fall_slope,
                if r.is_lens_like { "yes" } else { "no" }
            ));
        }

        let lens_count = records.iter().filter(|r| r.is_lens_like).count();
        out.push_str(&format!(
            "\n{} candidate peaks, {} lens-like\n",
            records.len(),
            lens_count
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let record = GlintFeatures {
            t_ms: 20.0,
            peak_value: 40.0,
            baseline: 2.0,
            height: 38.0,
            width_ms: 20.0,
            rise_slope: 3.8,
            fall_slope: -3.8,
            is_lens_like: true,
        };
        let out = TextFormatter
            .format(&[record, GlintFeatures { is_lens_like: false, ..record }])
            .unwrap();
        assert!(out.contains("2 candidate peaks, 1 lens-like"));
    }
}
