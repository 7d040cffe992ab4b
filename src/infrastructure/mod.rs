// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_dataset_repository;
pub mod svg_renderer;
