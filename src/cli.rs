use std::path::PathBuf;

use clap::Parser;

use crate::data::model::{LaunchDataset, PayloadRange, SiteSelector};
use crate::error::Result;

/// Interactive dashboard over SpaceX launch records
#[derive(Parser, Debug, Clone)]
#[command(name = "launch-dashboard", version)]
pub struct Cli {
    /// Launch table (.csv, .json or .parquet); a file dialog opens when omitted
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Same as PATH; PATH wins when both are given
    #[arg(long = "data", value_name = "PATH", env = "LAUNCH_DASHBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// Initial launch site, or ALL
    #[arg(long, default_value = "ALL")]
    pub site: SiteSelector,

    /// Initial lower payload bound in kg (defaults to the smallest payload)
    #[arg(long)]
    pub payload_low: Option<f64>,

    /// Initial upper payload bound in kg (defaults to the largest payload)
    #[arg(long)]
    pub payload_high: Option<f64>,

    /// Print the chart data for --site/--payload-* as JSON instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// Input path: positional PATH, then `--data`, then `LAUNCH_DASHBOARD_DATA`.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| self.data.clone())
    }

    /// Initial payload range; missing bounds fall back to the dataset's.
    pub fn initial_range(&self, dataset: &LaunchDataset) -> Result<PayloadRange> {
        PayloadRange::new(
            self.payload_low.unwrap_or(dataset.min_payload),
            self.payload_high.unwrap_or(dataset.max_payload),
        )
    }
}
