// Heatmap domain model - everything the renderer draws
use super::bucket::CellStyle;
use super::layout::{ChartGeometry, LayoutVariant, Tick};
use super::temperature::MonthIndex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub year: i32,
    pub month: MonthIndex,
    pub variance: f64,
    pub temperature: f64,
    pub x: i64,
    pub y: i64,
    pub width: f64,
    pub height: f64,
    pub style: CellStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: AxisOrientation,
    /// Translation applied to the whole axis group.
    pub offset: (f64, f64),
    /// Start and end of the axis line along its direction.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub x: f64,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub y: f64,
    pub box_size: f64,
    pub entries: Vec<LegendEntry>,
    pub axis: Axis,
}

#[derive(Debug, Clone)]
pub struct Heatmap {
    pub variant: LayoutVariant,
    pub geometry: ChartGeometry,
    pub title: String,
    pub description: String,
    pub base_temperature: f64,
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

impl Heatmap {
    pub const TITLE: &'static str = "Monthly Global Land-Surface Temperature";

    pub fn description(first_year: i32, last_year: i32, base_temperature: f64) -> String {
        format!("{first_year} - {last_year}: base temperature {base_temperature}° C")
    }
}
