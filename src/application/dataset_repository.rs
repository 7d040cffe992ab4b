// Repository trait for temperature dataset access
use crate::domain::temperature::Dataset;
use crate::error::{DataLoadError, ValidationError};
use async_trait::async_trait;

/// A loaded dataset together with the records that were dropped on the way.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub rejected: Vec<ValidationError>,
}

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Fetch and validate the dataset. Invalid records are skipped and
    /// reported in `rejected`; only transport or document-level failures
    /// are errors.
    async fn fetch_dataset(&self) -> Result<LoadedDataset, DataLoadError>;
}
