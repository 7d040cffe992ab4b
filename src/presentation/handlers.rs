// HTTP request handlers
use crate::domain::heatmap::{Cell, Heatmap};
use crate::domain::layout::LayoutVariant;
use crate::error::HeatmapError;
use crate::infrastructure::svg_renderer::render_svg;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct VariantQuery {
    pub variant: Option<LayoutVariant>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(heatmap_page))
        .route("/heatmap.svg", get(heatmap_svg))
        .route("/heatmap/cells", get(heatmap_cells))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full page: chart, tooltip and interaction script
pub async fn heatmap_page(
    Query(query): Query<VariantQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match build(&state, query.variant) {
        Ok(heatmap) => {
            let rendered = render_svg(&heatmap);
            Html(render_page(&heatmap.title, &rendered, heatmap.base_temperature)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Standalone SVG document
pub async fn heatmap_svg(
    Query(query): Query<VariantQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match build(&state, query.variant) {
        Ok(heatmap) => {
            let rendered = render_svg(&heatmap);
            ([(header::CONTENT_TYPE, "image/svg+xml")], rendered.svg).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Laid-out cells as JSON
pub async fn heatmap_cells(
    Query(query): Query<VariantQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match build(&state, query.variant) {
        Ok(heatmap) => Json::<Vec<Cell>>(heatmap.cells).into_response(),
        Err(e) => error_response(e),
    }
}

fn build(state: &AppState, variant: Option<LayoutVariant>) -> Result<Heatmap, HeatmapError> {
    let variant = variant.unwrap_or(state.default_variant);
    state.heatmap_service.build(variant)
}

fn error_response(error: HeatmapError) -> Response {
    tracing::error!("Error building heatmap: {}", error);
    match error {
        HeatmapError::EmptyDataset => (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response(),
    }
}
