pub mod report;

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error;
use crate::types::SelectorConfig;

/// Command-line arguments for ctslice
///
/// The request itself (base64 DICOM buffers and target count) arrives as a
/// single JSON object on stdin, or from `--input`.
#[derive(Parser, Debug)]
#[command(name = "ctslice")]
#[command(about = "Select a representative, anatomically stratified subset of CT slices")]
#[command(version)]
pub struct Cli {
    /// Read the JSON request from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Override the request's targetCount
    #[arg(short, long)]
    pub target_count: Option<usize>,

    /// Lower bound of the lung intensity band (exclusive)
    #[arg(long, default_value_t = -1000.0, allow_hyphen_values = true)]
    pub lower_hu: f32,

    /// Upper bound of the lung intensity band (exclusive)
    #[arg(long, default_value_t = -400.0, allow_hyphen_values = true)]
    pub upper_hu: f32,

    /// Minimum fraction of lung-band pixels for a slice to count as lung
    #[arg(long, default_value_t = 0.1)]
    pub area_fraction: f64,

    /// Do not write the region coverage report to stderr
    #[arg(long)]
    pub no_report: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Selector configuration derived from the threshold flags
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig::default()
            .with_lung_band(self.lower_hu, self.upper_hu)
            .with_min_area_fraction(self.area_fraction)
    }
}

/// Reads the raw request text from a file, or from stdin when no path is given
pub fn read_request(path: Option<&Path>) -> error::Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
