// HTML page hosting the chart and its tooltip
use crate::infrastructure::svg_renderer::RenderedChart;
use crate::presentation::interaction::InteractionHandler;

const CHART_ID: &str = "chart-container";
const TOOLTIP_ID: &str = "tooltip";

pub fn render_page(title: &str, rendered: &RenderedChart, base_temperature: f64) -> String {
    let handler = InteractionHandler::new(&rendered.cells, base_temperature);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div id="{CHART_ID}">
{svg}    </div>
    <div id="{TOOLTIP_ID}"></div>
    <script>{js}</script>
</body>
</html>
"#,
        title = title,
        css = inline_css(),
        svg = rendered.svg,
        js = handler.script(CHART_ID, TOOLTIP_ID),
    )
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #111827;
    background: #ffffff;
}

#chart-container {
    display: flex;
    justify-content: center;
}

#title {
    font-size: 28px;
    font-weight: 600;
}

.cell:hover {
    stroke: #111827;
    stroke-width: 1;
}

#tooltip {
    position: fixed;
    visibility: hidden;
    padding: 6px 10px;
    border-radius: 4px;
    background: rgba(17, 24, 39, 0.85);
    color: #ffffff;
    font-size: 13px;
    pointer-events: none;
    text-align: center;
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::temperature::MonthIndex;
    use crate::infrastructure::svg_renderer::CellElement;

    #[test]
    fn test_page_wires_chart_and_tooltip() {
        let rendered = RenderedChart {
            svg: "<svg></svg>\n".to_string(),
            cells: vec![CellElement {
                index: 0,
                year: 1900,
                month: MonthIndex::new(3).unwrap(),
                variance: 0.25,
            }],
        };

        let page = render_page("Heatmap", &rendered, 8.66);
        assert!(page.contains(r#"<div id="chart-container">"#));
        assert!(page.contains("<svg></svg>"));
        assert!(page.contains(r#"<div id="tooltip"></div>"#));
        assert!(page.contains("1900 - April"));
        assert!(page.contains("+0.25"));
    }
}
