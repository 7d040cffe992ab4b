//! Chart geometry and the layout engine.
//!
//! A [`Layout`] owns the two axis scales for one chart variant and places
//! each record at `(x(year), y(month))`, truncated to whole pixels.

use super::scale::{BandScale, LinearScale, OrdinalScale};
use super::temperature::{Dataset, MonthIndex, TemperatureRecord};
use serde::{Deserialize, Serialize};

/// Which chart pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Band-scaled years and months, 11-color palette.
    #[default]
    Band,
    /// Linear years, ordinal months, 4 CSS levels.
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendGeometry {
    pub x: f64,
    pub y: f64,
    pub box_size: f64,
    /// Baseline of the threshold axis under the boxes.
    pub axis_y: f64,
}

/// Compiled-in constants for one chart variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    /// Fixed cell size; `None` derives it from the band scales.
    pub cell_size: Option<(f64, f64)>,
    pub title: Point,
    pub description: Point,
    pub x_label: Point,
    pub y_label: Point,
    pub legend: LegendGeometry,
}

impl ChartGeometry {
    pub fn for_variant(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Band => Self::band(),
            LayoutVariant::Linear => Self::linear(),
        }
    }

    pub const fn band() -> Self {
        Self {
            width: 1620.0,
            height: 600.0,
            padding: Padding {
                top: 100.0,
                right: 100.0,
                bottom: 150.0,
                left: 100.0,
            },
            cell_size: None,
            title: Point::new(470.0, 50.0),
            description: Point::new(600.0, 75.0),
            x_label: Point::new(800.0, 490.0),
            y_label: Point::new(30.0, 300.0),
            legend: LegendGeometry {
                x: 100.0,
                y: 500.0,
                box_size: 40.0,
                axis_y: 540.0,
            },
        }
    }

    pub const fn linear() -> Self {
        Self {
            width: 1500.0,
            height: 560.0,
            padding: Padding::uniform(80.0),
            cell_size: Some((5.0, 30.0)),
            title: Point::new(450.0, 40.0),
            description: Point::new(560.0, 65.0),
            x_label: Point::new(740.0, 480.0),
            y_label: Point::new(25.0, 260.0),
            legend: LegendGeometry {
                x: 80.0,
                y: 500.0,
                box_size: 30.0,
                axis_y: 530.0,
            },
        }
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.padding.left, self.width - self.padding.right)
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.padding.top, self.height - self.padding.bottom)
    }
}

#[derive(Debug, Clone)]
pub enum YearScale {
    Band(BandScale<i32>),
    Linear(LinearScale),
}

impl YearScale {
    pub fn position(&self, year: i32) -> Option<f64> {
        match self {
            YearScale::Band(scale) => scale.position(year),
            YearScale::Linear(scale) => Some(scale.position(f64::from(year))),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MonthScale {
    Band(BandScale<MonthIndex>),
    Ordinal(OrdinalScale<MonthIndex>),
}

impl MonthScale {
    pub fn position(&self, month: MonthIndex) -> Option<f64> {
        match self {
            MonthScale::Band(scale) => scale.position(month),
            MonthScale::Ordinal(scale) => scale.position(month),
        }
    }
}

/// A labelled axis tick at a pixel offset along its axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Whole-pixel top-left corner of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPosition {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone)]
pub struct Layout {
    variant: LayoutVariant,
    geometry: ChartGeometry,
    x: YearScale,
    y: MonthScale,
    cell_width: f64,
    cell_height: f64,
}

/// Tick count requested from the linear year scale.
const LINEAR_TICK_COUNT: usize = 10;

impl Layout {
    pub fn new(variant: LayoutVariant, dataset: &Dataset) -> Self {
        let geometry = ChartGeometry::for_variant(variant);
        match variant {
            LayoutVariant::Band => Self::band(geometry, dataset),
            LayoutVariant::Linear => Self::linear(geometry, dataset),
        }
    }

    /// Band years (left-aligned) and band months (bottom-aligned); cells share
    /// the unrounded range evenly.
    pub fn band(geometry: ChartGeometry, dataset: &Dataset) -> Self {
        let x = BandScale::new(dataset.monthly_variance.iter().map(|r| r.year), geometry.x_range(), 0.0);
        let y = BandScale::new(MonthIndex::all(), geometry.y_range(), 1.0);

        let (cell_width, cell_height) = geometry
            .cell_size
            .unwrap_or((x.even_share(), y.even_share()));

        Self {
            variant: LayoutVariant::Band,
            geometry,
            x: YearScale::Band(x),
            y: MonthScale::Band(y),
            cell_width,
            cell_height,
        }
    }

    /// Linear years over `[min, max]` and fixed-height month rows.
    pub fn linear(geometry: ChartGeometry, dataset: &Dataset) -> Self {
        let (first, last) = dataset.year_span().unwrap_or((0, 0));
        let (cell_width, cell_height) = geometry.cell_size.unwrap_or_else(|| {
            let (top, bottom) = geometry.y_range();
            (1.0, (bottom - top) / f64::from(MonthIndex::COUNT))
        });

        let x = LinearScale::new((f64::from(first), f64::from(last)), geometry.x_range());
        let rows = MonthIndex::all()
            .map(|m| geometry.padding.top + f64::from(m.value()) * cell_height)
            .collect();
        let y = OrdinalScale::new(MonthIndex::all().collect(), rows);

        Self {
            variant: LayoutVariant::Linear,
            geometry,
            x: YearScale::Linear(x),
            y: MonthScale::Ordinal(y),
            cell_width,
            cell_height,
        }
    }

    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn year_scale(&self) -> &YearScale {
        &self.x
    }

    pub fn month_scale(&self) -> &MonthScale {
        &self.y
    }

    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_width, self.cell_height)
    }

    /// `None` only when the record's year or month is missing from the
    /// scale domains, which cannot happen for records of the dataset the
    /// layout was built from.
    pub fn place(&self, record: &TemperatureRecord) -> Option<CellPosition> {
        let x = self.x.position(record.year)?;
        let y = self.y.position(record.month)?;
        Some(CellPosition {
            x: x.trunc() as i64,
            y: y.trunc() as i64,
        })
    }

    pub fn year_ticks(&self) -> Vec<Tick> {
        match &self.x {
            YearScale::Band(scale) => {
                let offset = scale.bandwidth() / 2.0;
                scale
                    .domain()
                    .iter()
                    .filter(|year| *year % 10 == 0)
                    .filter_map(|&year| {
                        scale.position(year).map(|x| Tick {
                            position: x + offset,
                            label: year.to_string(),
                        })
                    })
                    .collect()
            }
            YearScale::Linear(scale) => scale
                .ticks(LINEAR_TICK_COUNT)
                .into_iter()
                .map(|year| Tick {
                    position: scale.position(year),
                    label: format!("{}", year.round() as i64),
                })
                .collect(),
        }
    }

    pub fn month_ticks(&self) -> Vec<Tick> {
        let offset = match &self.y {
            MonthScale::Band(scale) => scale.bandwidth() / 2.0,
            MonthScale::Ordinal(_) => self.cell_height / 2.0,
        };
        MonthIndex::all()
            .filter_map(|month| {
                self.y.position(month).map(|y| Tick {
                    position: y + offset,
                    label: month.name().to_string(),
                })
            })
            .collect()
    }

    /// Start and end of the drawn x-axis line: where the cells actually
    /// begin and end, not the nominal range.
    pub fn year_axis_extent(&self) -> (f64, f64) {
        match &self.x {
            YearScale::Band(scale) => scale.extent(),
            YearScale::Linear(scale) => {
                let (r0, r1) = scale.range();
                (r0, r1 + self.cell_width)
            }
        }
    }

    pub fn month_axis_extent(&self) -> (f64, f64) {
        match &self.y {
            MonthScale::Band(scale) => scale.extent(),
            MonthScale::Ordinal(scale) => {
                let top = scale.range().first().copied().unwrap_or(self.geometry.padding.top);
                let bottom = scale.range().last().copied().unwrap_or(top) + self.cell_height;
                (top, bottom)
            }
        }
    }
}
