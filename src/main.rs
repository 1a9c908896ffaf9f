use std::fs;
use std::path::PathBuf;

use clap::Parser;

use lensglint::config::DetectorConfig;
use lensglint::detect::analyze;
use lensglint::output::{Formatter, OutputFormat, create_formatter};
use lensglint::series::{interval_stats, load_series};

#[derive(Parser, Debug)]
#[command(name = "lensglint")]
#[command(about = "Detect camera-lens retroreflections in IR differential logs", long_about = None)]
struct Args {
    /// IR log to analyze (CSV with columns: ms, diff)
    input: PathBuf,

    /// Output format: csv, text, json
    #[arg(short = 'f', long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Write the table to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Threshold configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Minimum height above local baseline
    #[arg(long)]
    height_min: Option<f64>,

    /// Maximum FWHM width in milliseconds
    #[arg(long)]
    width_max_ms: Option<f64>,

    /// Minimum rise slope (diff units per ms)
    #[arg(long)]
    rise_min: Option<f64>,

    /// Minimum fall slope magnitude (diff units per ms)
    #[arg(long)]
    fall_min: Option<f64>,

    /// Absolute minimum peak value considered at all
    #[arg(long)]
    noise_floor: Option<f64>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match args.config {
        Some(ref path) => DetectorConfig::from_toml_path(path)?,
        None => DetectorConfig::default(),
    };

    if let Some(v) = args.height_min {
        config.height_min = v;
    }
    if let Some(v) = args.width_max_ms {
        config.width_max_ms = v;
    }
    if let Some(v) = args.rise_min {
        config.rise_min = v;
    }
    if let Some(v) = args.fall_min {
        config.fall_min = v;
    }
    if let Some(v) = args.noise_floor {
        config.noise_floor_height = v;
    }
    config.validate()?;

    log::info!(
        "Thresholds: height >= {}, width <= {} ms, rise >= {}, |fall| >= {}, noise floor > {}",
        config.height_min,
        config.width_max_ms,
        config.rise_min,
        config.fall_min,
        config.noise_floor_height
    );

    let samples = load_series(&args.input)?;
    log::info!("Loaded {} samples from {}", samples.len(), args.input.display());

    if let Some(stats) = interval_stats(&samples) {
        log::info!(
            "Approx. sample interval: {:.2} ± {:.2} ms (min {:.2}, max {:.2}, n={})",
            stats.mean_ms,
            stats.std_dev_ms,
            stats.min_ms,
            stats.max_ms,
            stats.count
        );
    }

    let records = analyze(&samples, &config);
    let lens_count = records.iter().filter(|r| r.is_lens_like).count();
    log::info!(
        "Found {} candidate peaks, {} lens-like",
        records.len(),
        lens_count
    );

    let rendered = create_formatter(args.format).format(&records)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &rendered)?;
            log::info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
