// Application layer - Use cases and ports
pub mod dataset_repository;
pub mod heatmap_service;
