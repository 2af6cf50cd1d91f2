//! Configuration module: immutable const blueprints.

mod api;
mod demo;
mod indicator;

// Can't be private because we don't re-export it
pub mod chart;

// Re-export commonly used items
pub use api::{BAR_API, BarApiConfig};
pub use demo::DEMO;
pub use indicator::{IndicatorProfile, MAX_SIGNALS, indicator_profile};
