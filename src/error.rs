use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the dashboard core.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A payload range whose lower bound exceeds its upper bound (or is NaN).
    #[error("Invalid payload range: [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },

    /// The input table could not be read or failed validation.
    #[error("Failed to load dataset {path}")]
    DatasetLoad {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
