// Application state for HTTP handlers
use crate::application::heatmap_service::HeatmapService;
use crate::domain::layout::LayoutVariant;

#[derive(Clone)]
pub struct AppState {
    pub heatmap_service: HeatmapService,
    pub default_variant: LayoutVariant,
}
