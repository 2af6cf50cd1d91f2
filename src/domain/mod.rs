// Domain types and value objects
mod bar;
mod timeframe;

// Re-export commonly used types
pub use bar::{Bar, BarKind, times_strictly_increasing};
pub use timeframe::Timeframe;
