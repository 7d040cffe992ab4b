// Presentation layer - HTTP surface and browser glue
pub mod app_state;
pub mod handlers;
pub mod interaction;
pub mod page;
