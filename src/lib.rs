//! Monthly global land-surface temperature heatmap.
//!
//! Layered like a small service: `domain` holds the pure chart math
//! (bucketing, scales, layout, tooltip text), `application` the use cases,
//! `infrastructure` the dataset fetch, config and SVG output, and
//! `presentation` the HTTP routes and browser glue.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
