// Hover interaction for rendered cells
use crate::domain::layout::Point;
use crate::domain::tooltip::Tooltip;
use crate::infrastructure::svg_renderer::CellElement;

/// Tooltip placement relative to the pointer.
pub const TOOLTIP_OFFSET: Point = Point::new(20.0, -20.0);

/// State of the single tooltip node. Every hover overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipSurface {
    pub left: f64,
    pub top: f64,
    pub visible: bool,
    pub year: Option<i32>,
    pub markup: String,
}

pub struct InteractionHandler<'a> {
    cells: &'a [CellElement],
    base_temperature: f64,
}

impl<'a> InteractionHandler<'a> {
    pub fn new(cells: &'a [CellElement], base_temperature: f64) -> Self {
        Self {
            cells,
            base_temperature,
        }
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.cells
            .get(index)
            .map(|cell| Tooltip::new(cell.year, cell.month, cell.variance, self.base_temperature))
    }

    /// Show the tooltip for cell `index` next to `pointer`. Unknown cells
    /// leave the surface untouched.
    pub fn hover(&self, index: usize, pointer: Point, surface: &mut TooltipSurface) -> bool {
        let Some(tooltip) = self.tooltip(index) else {
            return false;
        };

        surface.left = pointer.x + TOOLTIP_OFFSET.x;
        surface.top = pointer.y + TOOLTIP_OFFSET.y;
        surface.year = Some(tooltip.year);
        surface.markup = tooltip.markup();
        surface.visible = true;
        true
    }

    pub fn leave(&self, surface: &mut TooltipSurface) {
        surface.visible = false;
    }

    /// Tooltip markup for every cell, indexed like `data-index`.
    pub fn contents(&self) -> Vec<String> {
        (0..self.cells.len())
            .filter_map(|i| self.tooltip(i).map(|t| t.markup()))
            .collect()
    }

    /// Browser glue binding hover/leave on the chart's cells to the tooltip
    /// element. Mirrors [`hover`](Self::hover) and [`leave`](Self::leave).
    pub fn script(&self, chart_id: &str, tooltip_id: &str) -> String {
        let contents = serde_json::to_string(&self.contents())
            .unwrap_or_else(|_| "[]".to_string())
            .replace("</", "<\\/");

        format!(
            r#"(() => {{
  const tooltip = document.getElementById('{tooltip_id}');
  const contents = {contents};
  document.getElementById('{chart_id}').querySelectorAll('rect.cell').forEach((cell) => {{
    const index = Number(cell.getAttribute('data-index'));
    cell.addEventListener('mouseover', (e) => {{
      tooltip.style.left = `${{e.clientX + {dx}}}px`;
      tooltip.style.top = `${{e.clientY + {dy}}}px`;
      tooltip.setAttribute('data-year', cell.getAttribute('data-year'));
      tooltip.innerHTML = contents[index];
      tooltip.style.visibility = 'visible';
    }});
    cell.addEventListener('mouseleave', () => {{
      tooltip.style.visibility = 'hidden';
    }});
  }});
}})();"#,
            dx = TOOLTIP_OFFSET.x,
            dy = TOOLTIP_OFFSET.y,
        )
    }
}
