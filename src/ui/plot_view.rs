use eframe::egui::Ui;
use egui_plot::{Axis, AxisHints, Plot, VPlacement};

use crate::ui::app::PlotVisibility;
use crate::ui::chart::ChartState;
use crate::ui::layers::{
    CandlestickLayer, LayerContext, PlotLayer, SignalMarkerLayer, TrendRibbonLayer,
};
use crate::utils::epoch_sec_to_label;

// Helper to build the Time Axis: plot-x is raw unix seconds, labels go
// through chrono with a granularity matching the timeframe step.
fn create_time_axis(step_secs: i64) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label("Time")
        .formatter(move |mark, _range| epoch_sec_to_label(mark.value as i64, step_secs))
        .placement(VPlacement::Bottom)
}

pub fn render_plot(ui: &mut Ui, chart: &ChartState, visibility: &PlotVisibility) {
    let step_secs = chart.timeframe.seconds();

    // Layer order is paint order: candles under the ribbon, markers on top
    let layers: [&dyn PlotLayer; 3] = [&CandlestickLayer, &TrendRibbonLayer, &SignalMarkerLayer];
    let ctx = LayerContext {
        chart,
        visibility,
        step_secs: step_secs as f64,
    };

    Plot::new("signal_scope_plot")
        .custom_x_axes(vec![create_time_axis(step_secs)])
        .show(ui, |plot_ui| {
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}
