// SVG rendering of a laid-out heatmap
use crate::domain::bucket::{CellStyle, Level};
use crate::domain::heatmap::{Axis, AxisOrientation, Cell, Heatmap, Legend};
use crate::domain::layout::Point;
use crate::domain::temperature::MonthIndex;
use std::fmt::Write;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// A cell as it exists in the rendered document, addressed by `data-index`.
#[derive(Debug, Clone, PartialEq)]
pub struct CellElement {
    pub index: usize,
    pub year: i32,
    pub month: MonthIndex,
    pub variance: f64,
}

/// Rendered SVG plus handles to every cell element it contains.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub svg: String,
    pub cells: Vec<CellElement>,
}

pub fn render_svg(heatmap: &Heatmap) -> RenderedChart {
    let geometry = &heatmap.geometry;
    let mut svg = String::with_capacity(256 + heatmap.cells.len() * 160);

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" class="chart">"#,
        geometry.width, geometry.height
    );
    svg.push_str(&stylesheet());

    write_text(&mut svg, "title", geometry.title, &heatmap.title, None);
    write_text(&mut svg, "description", geometry.description, &heatmap.description, None);

    write_axis(&mut svg, &heatmap.x_axis);
    write_axis(&mut svg, &heatmap.y_axis);

    write_text(&mut svg, "y-label", geometry.y_label, "Month", Some(270.0));
    write_text(&mut svg, "x-label", geometry.x_label, "Year", None);

    let cells: Vec<CellElement> = heatmap
        .cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            write_cell(&mut svg, index, cell);
            CellElement {
                index,
                year: cell.year,
                month: cell.month,
                variance: cell.variance,
            }
        })
        .collect();

    write_legend(&mut svg, &heatmap.legend);
    svg.push_str("</svg>\n");

    RenderedChart { svg, cells }
}

fn stylesheet() -> String {
    let mut css = String::from("<style>\n");
    css.push_str("  .tick text { font: 10px sans-serif; }\n");
    for level in [Level::One, Level::Two, Level::Three, Level::Four] {
        let _ = writeln!(css, "  .{} {{ fill: {}; }}", level.class(), level.color());
    }
    css.push_str("</style>\n");
    css
}

fn write_text(svg: &mut String, id: &str, at: Point, text: &str, rotate: Option<f64>) {
    let transform = rotate
        .map(|deg| format!(r#" transform="rotate({deg}, {}, {})""#, at.x, at.y))
        .unwrap_or_default();
    let _ = writeln!(
        svg,
        r#"<text id="{id}" x="{}" y="{}"{transform}>{}</text>"#,
        at.x,
        at.y,
        escape(text)
    );
}

fn write_axis(svg: &mut String, axis: &Axis) {
    let (dx, dy) = axis.offset;
    let (start, end) = axis.extent;
    let _ = writeln!(svg, r#"<g id="{}" transform="translate({dx},{dy})">"#, axis.id);

    let path = match axis.orientation {
        AxisOrientation::Bottom => format!("M{start},0H{end}"),
        AxisOrientation::Left => format!("M0,{start}V{end}"),
    };
    let _ = writeln!(svg, r#"  <path class="domain" stroke="currentColor" d="{path}"/>"#);

    for tick in &axis.ticks {
        let label = escape(&tick.label);
        match axis.orientation {
            AxisOrientation::Bottom => {
                let _ = writeln!(
                    svg,
                    r#"  <g class="tick" transform="translate({},0)"><line stroke="currentColor" y2="{TICK_SIZE}"/><text fill="currentColor" y="{}" dy="0.71em" text-anchor="middle">{label}</text></g>"#,
                    tick.position,
                    TICK_SIZE + TICK_PADDING
                );
            }
            AxisOrientation::Left => {
                let _ = writeln!(
                    svg,
                    r#"  <g class="tick" transform="translate(0,{})"><line stroke="currentColor" x2="-{TICK_SIZE}"/><text fill="currentColor" x="-{}" dy="0.32em" text-anchor="end">{label}</text></g>"#,
                    tick.position,
                    TICK_SIZE + TICK_PADDING
                );
            }
        }
    }
    svg.push_str("</g>\n");
}

fn write_cell(svg: &mut String, index: usize, cell: &Cell) {
    let (class, fill) = match cell.style {
        CellStyle::Fill(color) => ("cell".to_string(), format!(r#" fill="{color}""#)),
        CellStyle::Class(class) => (format!("cell {class}"), String::new()),
    };
    let _ = writeln!(
        svg,
        r#"<rect class="{class}" data-index="{index}" data-year="{}" data-month="{}" data-temp="{}" x="{}" y="{}" width="{}" height="{}"{fill}/>"#,
        cell.year,
        cell.month.value(),
        cell.variance,
        cell.x,
        cell.y,
        cell.width,
        cell.height
    );
}

fn write_legend(svg: &mut String, legend: &Legend) {
    svg.push_str("<g id=\"legend\">\n");
    write_axis(svg, &legend.axis);
    for entry in &legend.entries {
        let (class, fill) = match entry.style {
            CellStyle::Fill(color) => (String::new(), format!(r#" fill="{color}""#)),
            CellStyle::Class(class) => (format!(r#" class="{class}""#), String::new()),
        };
        let _ = writeln!(
            svg,
            r##"  <rect stroke="#333"{class} x="{}" y="{}" width="{}" height="{}"{fill}/>"##,
            entry.x, legend.y, legend.box_size, legend.box_size
        );
    }
    svg.push_str("</g>\n");
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
