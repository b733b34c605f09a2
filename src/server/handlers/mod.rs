//! HTTP handlers.

mod generate;
mod metrics;
mod status;

pub use generate::{generate_get_handler, generate_post_handler};
pub use metrics::metrics_handler;
pub use status::{health_handler, status_handler};
