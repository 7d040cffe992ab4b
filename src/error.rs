// Error types shared across layers
use thiserror::Error;

/// Failure to retrieve or decode the temperature dataset.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("failed to request dataset from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("dataset request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse dataset: {0}")]
    Parse(String),
}

/// A single record that cannot be placed on the chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("record {index}: month {month} outside 1-12")]
    MonthOutOfRange { index: usize, month: i64 },

    #[error("record {index}: year {year} out of range")]
    YearOutOfRange { index: usize, year: i64 },

    #[error("record {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: variance is not a finite number")]
    NonFiniteVariance { index: usize },

    #[error("record {index}: malformed record: {reason}")]
    Malformed { index: usize, reason: String },
}

/// Threshold tables must be finite and strictly descending.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("threshold at position {position} is not finite")]
    NonFinite { position: usize },

    #[error("threshold {current} at position {position} is not below {previous}")]
    NotDescending {
        position: usize,
        previous: f64,
        current: f64,
    },
}

/// Errors raised while turning a dataset into a heatmap.
#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("dataset contains no valid records")]
    EmptyDataset,
}
