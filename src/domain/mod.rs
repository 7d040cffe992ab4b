// Domain layer - Pure models and chart math
pub mod bucket;
pub mod heatmap;
pub mod layout;
pub mod scale;
pub mod temperature;
pub mod tooltip;
