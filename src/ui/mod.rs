mod app;
mod chart;
mod layers;
mod plot_view;

pub use app::{App, PlotVisibility};
pub use chart::ChartState;
