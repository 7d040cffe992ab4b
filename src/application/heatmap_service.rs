// Heatmap service - Use case for laying out the temperature heatmap
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::bucket::BucketScheme;
use crate::domain::heatmap::{Axis, AxisOrientation, Cell, Heatmap, Legend, LegendEntry};
use crate::domain::layout::{Layout, LayoutVariant, Tick};
use crate::domain::temperature::Dataset;
use crate::error::{DataLoadError, HeatmapError};
use std::sync::Arc;

#[derive(Clone)]
pub struct HeatmapService {
    dataset: Arc<Dataset>,
}

impl HeatmapService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Fetch the dataset once and keep it for every later render.
    pub async fn load(repository: &dyn DatasetRepository) -> Result<Self, DataLoadError> {
        let loaded = repository.fetch_dataset().await?;

        for rejection in &loaded.rejected {
            tracing::warn!("Skipping record: {}", rejection);
        }
        tracing::info!(
            "Loaded {} records ({} skipped), base temperature {}",
            loaded.dataset.monthly_variance.len(),
            loaded.rejected.len(),
            loaded.dataset.base_temperature
        );

        Ok(Self::new(Arc::new(loaded.dataset)))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn build(&self, variant: LayoutVariant) -> Result<Heatmap, HeatmapError> {
        let dataset = self.dataset.as_ref();
        let (first_year, last_year) = dataset.year_span().ok_or(HeatmapError::EmptyDataset)?;

        let layout = Layout::new(variant, dataset);
        let scheme = match variant {
            LayoutVariant::Band => BucketScheme::palette(),
            LayoutVariant::Linear => BucketScheme::levels(),
        };

        let cells = Self::layout_cells(dataset, &layout, &scheme);
        tracing::debug!("Laid out {} cells for {:?} variant", cells.len(), variant);

        let geometry = *layout.geometry();
        let (_, x_axis_y) = layout.month_axis_extent();
        let x_axis = Axis {
            id: "x-axis",
            orientation: AxisOrientation::Bottom,
            offset: (-0.5, x_axis_y),
            extent: layout.year_axis_extent(),
            ticks: layout.year_ticks(),
        };
        let y_axis = Axis {
            id: "y-axis",
            orientation: AxisOrientation::Left,
            offset: (geometry.padding.left - 1.0, 0.5),
            extent: layout.month_axis_extent(),
            ticks: layout.month_ticks(),
        };

        Ok(Heatmap {
            variant,
            geometry,
            title: Heatmap::TITLE.to_string(),
            description: Heatmap::description(first_year, last_year, dataset.base_temperature),
            base_temperature: dataset.base_temperature,
            cells,
            x_axis,
            y_axis,
            legend: Self::legend(&layout, &scheme),
        })
    }

    fn layout_cells(dataset: &Dataset, layout: &Layout, scheme: &BucketScheme) -> Vec<Cell> {
        let (width, height) = layout.cell_size();

        dataset
            .monthly_variance
            .iter()
            .filter_map(|record| {
                let Some(position) = layout.place(record) else {
                    tracing::warn!(
                        "No position for {}-{:02}, leaving it out",
                        record.year,
                        record.calendar_month()
                    );
                    return None;
                };
                let temperature = dataset.absolute_temperature(record);

                Some(Cell {
                    year: record.year,
                    month: record.month,
                    variance: record.variance,
                    temperature,
                    x: position.x,
                    y: position.y,
                    width,
                    height,
                    style: scheme.style(temperature),
                })
            })
            .collect()
    }

    /// One box per bucket, coldest first, with each threshold labelled on
    /// the boundary where its bucket begins.
    fn legend(layout: &Layout, scheme: &BucketScheme) -> Legend {
        let geometry = layout.geometry().legend;

        let entries: Vec<LegendEntry> = scheme
            .styles_ascending()
            .into_iter()
            .enumerate()
            .map(|(i, style)| LegendEntry {
                x: geometry.x + geometry.box_size * i as f64,
                style,
            })
            .collect();

        let bounds = scheme.bounds_ascending();
        let ticks: Vec<Tick> = bounds
            .iter()
            .enumerate()
            .map(|(i, bound)| Tick {
                position: geometry.x + geometry.box_size * i as f64,
                label: format!("{bound}"),
            })
            .collect();
        let last = ticks.last().map(|t| t.position).unwrap_or(geometry.x);

        Legend {
            y: geometry.y,
            box_size: geometry.box_size,
            entries,
            axis: Axis {
                id: "legend-axis",
                orientation: AxisOrientation::Bottom,
                offset: (geometry.box_size - 0.5, geometry.axis_y),
                extent: (geometry.x, last),
                ticks,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset_repository::LoadedDataset;
    use crate::domain::bucket::{CellStyle, PALETTE};
    use crate::domain::temperature::TemperatureRecord;
    use crate::error::ValidationError;
    use async_trait::async_trait;

    fn service(base: f64, records: &[(i64, i64, f64)]) -> HeatmapService {
        let records = records
            .iter()
            .enumerate()
            .map(|(i, &(year, month, variance))| TemperatureRecord::new(i, year, month, variance).unwrap())
            .collect();
        HeatmapService::new(Arc::new(Dataset::new(base, records)))
    }

    struct StubRepository {
        result: fn() -> Result<LoadedDataset, DataLoadError>,
    }

    #[async_trait]
    impl DatasetRepository for StubRepository {
        async fn fetch_dataset(&self) -> Result<LoadedDataset, DataLoadError> {
            (self.result)()
        }
    }

    #[test]
    fn test_single_record_end_to_end() {
        let heatmap = service(5.0, &[(2000, 1, 5.0)]).build(LayoutVariant::Band).unwrap();

        assert_eq!(heatmap.cells.len(), 1);
        let cell = &heatmap.cells[0];
        assert_eq!(cell.temperature, 10.0);
        // 10 clears 9.5 but not 10.6
        assert_eq!(cell.style, CellStyle::Fill(PALETTE[7]));
        assert_eq!(cell.month.value(), 0);
        assert_eq!(heatmap.description, "2000 - 2000: base temperature 5° C");
    }

    #[test]
    fn test_linear_variant_uses_levels() {
        let heatmap = service(8.66, &[(1900, 1, -4.0), (1900, 2, 0.0), (1901, 1, 1.5)])
            .build(LayoutVariant::Linear)
            .unwrap();

        let classes: Vec<CellStyle> = heatmap.cells.iter().map(|c| c.style).collect();
        assert_eq!(
            classes,
            vec![
                CellStyle::Class("level-1"),
                CellStyle::Class("level-3"),
                CellStyle::Class("level-4"),
            ]
        );
        assert!(heatmap.cells.iter().all(|c| c.width == 5.0 && c.height == 30.0));
    }

    #[test]
    fn test_cells_keep_zero_based_month() {
        let records: Vec<(i64, i64, f64)> = (1..=12).map(|m| (1990, m, 0.0)).collect();
        let heatmap = service(8.66, &records).build(LayoutVariant::Band).unwrap();

        for (cell, month) in heatmap.cells.iter().zip(1..=12u8) {
            assert_eq!(cell.month.value(), month - 1);
        }
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let result = service(8.66, &[]).build(LayoutVariant::Band);
        assert!(matches!(result, Err(HeatmapError::EmptyDataset)));
    }

    #[test]
    fn test_axes_and_legend() {
        let heatmap = service(8.66, &[(1753, 1, 0.0), (2015, 12, 0.0)])
            .build(LayoutVariant::Band)
            .unwrap();

        assert_eq!(heatmap.x_axis.offset, (-0.5, 450.0));
        assert_eq!(heatmap.y_axis.offset, (99.0, 0.5));
        assert_eq!(heatmap.y_axis.ticks.len(), 12);

        assert_eq!(heatmap.legend.entries.len(), 11);
        assert_eq!(heatmap.legend.entries[0].x, 100.0);
        assert_eq!(heatmap.legend.entries[10].x, 500.0);
        assert_eq!(heatmap.legend.axis.ticks.len(), 10);
        assert_eq!(heatmap.legend.axis.ticks[0].label, "2.8");
        assert_eq!(heatmap.legend.axis.ticks[7].label, "10.6");
        assert_eq!(heatmap.legend.axis.ticks[9].position, 460.0);
    }

    #[tokio::test]
    async fn test_load_keeps_valid_records() {
        let repository = StubRepository {
            result: || {
                Ok(LoadedDataset {
                    dataset: Dataset::new(8.66, vec![TemperatureRecord::new(0, 1753, 1, -1.366).unwrap()]),
                    rejected: vec![ValidationError::MonthOutOfRange { index: 1, month: 13 }],
                })
            },
        };

        let service = HeatmapService::load(&repository).await.unwrap();
        assert_eq!(service.dataset().monthly_variance.len(), 1);
    }

    #[tokio::test]
    async fn test_load_surfaces_errors() {
        let repository = StubRepository {
            result: || Err(DataLoadError::Parse("unexpected end of input".to_string())),
        };

        let result = HeatmapService::load(&repository).await;
        assert!(matches!(result, Err(DataLoadError::Parse(_))));
    }
}
