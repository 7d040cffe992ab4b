// HTTP dataset repository implementation
use crate::application::dataset_repository::{DatasetRepository, LoadedDataset};
use crate::domain::temperature::{Dataset, TemperatureRecord};
use crate::error::{DataLoadError, ValidationError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpDatasetRepository {
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetDocument {
    base_temperature: f64,
    // kept as raw values so one bad record doesn't fail the document
    monthly_variance: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RecordDocument {
    year: Option<i64>,
    month: Option<i64>,
    variance: Option<f64>,
}

impl HttpDatasetRepository {
    pub fn new(url: String, timeout: Duration) -> Result<Self, DataLoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| DataLoadError::Request {
                url: url.clone(),
                source,
            })?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Decode a dataset document, validating each record independently.
pub fn parse_document(body: &str) -> Result<LoadedDataset, DataLoadError> {
    let document: DatasetDocument =
        serde_json::from_str(body).map_err(|e| DataLoadError::Parse(e.to_string()))?;

    let mut records = Vec::with_capacity(document.monthly_variance.len());
    let mut rejected = Vec::new();

    for (index, value) in document.monthly_variance.into_iter().enumerate() {
        match parse_record(index, value) {
            Ok(record) => records.push(record),
            Err(e) => rejected.push(e),
        }
    }

    Ok(LoadedDataset {
        dataset: Dataset::new(document.base_temperature, records),
        rejected,
    })
}

fn parse_record(index: usize, value: serde_json::Value) -> Result<TemperatureRecord, ValidationError> {
    let raw: RecordDocument = serde_json::from_value(value).map_err(|e| ValidationError::Malformed {
        index,
        reason: e.to_string(),
    })?;

    let year = raw.year.ok_or(ValidationError::MissingField { index, field: "year" })?;
    let month = raw.month.ok_or(ValidationError::MissingField { index, field: "month" })?;
    let variance = raw
        .variance
        .ok_or(ValidationError::MissingField { index, field: "variance" })?;

    TemperatureRecord::new(index, year, month, variance)
}

#[async_trait]
impl DatasetRepository for HttpDatasetRepository {
    async fn fetch_dataset(&self) -> Result<LoadedDataset, DataLoadError> {
        tracing::debug!("Fetching dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| DataLoadError::Request {
                url: self.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(DataLoadError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| DataLoadError::Request {
            url: self.url.clone(),
            source,
        })?;
        tracing::debug!("Received {} bytes", body.len());

        parse_document(&body)
    }
}
