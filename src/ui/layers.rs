use eframe::egui::{Color32, Id, LayerId, Order, Pos2, Shape, Stroke};
use egui_plot::{Line, PlotPoint, PlotPoints, PlotUi, Polygon};

use crate::config::chart::CHART_CONFIG;
use crate::indicators::{Side, SplitPoint};
use crate::ui::app::PlotVisibility;
use crate::ui::chart::ChartState;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub chart: &'a ChartState,
    pub visibility: &'a PlotVisibility,
    /// One timeframe step in plot-x units (seconds)
    pub step_secs: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. CANDLESTICK LAYER
// ============================================================================
pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.candles {
            return;
        }
        let half_w = ctx.step_secs * CHART_CONFIG.candle_width_pct / 2.0;

        for bar in &ctx.chart.bars {
            let x = bar.time as f64;
            let is_green = bar.close >= bar.open;
            let color = if is_green {
                CHART_CONFIG.candle_bullish_color
            } else {
                CHART_CONFIG.candle_bearish_color
            };

            if bar.high > bar.low {
                draw_wick_line(plot_ui, x, bar.high, bar.low, color);
            }

            let (body_bot, body_top_raw) = bar.body_range();
            // Doji check: give zero-height bodies a sliver so they stay visible
            let body_top = if (body_top_raw - body_bot).abs() < f64::EPSILON {
                body_bot * 1.0001
            } else {
                body_top_raw
            };
            draw_body_rect(plot_ui, x, half_w, body_top, body_bot, color);
        }
    }
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(CHART_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, half_w: f64, top: f64, bottom: f64, color: Color32) {
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];
    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

// ============================================================================
// 2. TREND RIBBON LAYER (the color-flip EMA line)
// ============================================================================
pub struct TrendRibbonLayer;

impl PlotLayer for TrendRibbonLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.visibility.slow_ema && !ctx.chart.slow_ema.is_empty() {
            let pts: Vec<[f64; 2]> = ctx
                .chart
                .slow_ema
                .iter()
                .filter(|p| p.value.is_finite())
                .map(|p| [p.time as f64, p.value])
                .collect();
            plot_ui.line(
                Line::new("EMA slow", PlotPoints::new(pts))
                    .color(CHART_CONFIG.slow_ema_color)
                    .width(CHART_CONFIG.slow_ema_width),
            );
        }

        if !ctx.visibility.ribbon {
            return;
        }
        draw_split_series(
            plot_ui,
            &ctx.chart.split.above,
            CHART_CONFIG.ribbon_above_color,
        );
        draw_split_series(
            plot_ui,
            &ctx.chart.split.below,
            CHART_CONFIG.ribbon_below_color,
        );
    }
}

/// Draw one polarity of the split series. An absent marker is a hard line
/// break, so each contiguous run of real values becomes its own `Line` —
/// never interpolate across a gap.
fn draw_split_series(plot_ui: &mut PlotUi, series: &[SplitPoint], color: Color32) {
    let mut run: Vec<[f64; 2]> = Vec::new();
    for point in series {
        match point.value {
            Some(v) if v.is_finite() => run.push([point.time as f64, v]),
            _ => flush_run(plot_ui, &mut run, color),
        }
    }
    flush_run(plot_ui, &mut run, color);
}

fn flush_run(plot_ui: &mut PlotUi, run: &mut Vec<[f64; 2]>, color: Color32) {
    if run.len() > 1 {
        plot_ui.line(
            Line::new("", PlotPoints::new(std::mem::take(run)))
                .color(color)
                .width(CHART_CONFIG.ribbon_width),
        );
    } else {
        run.clear();
    }
}

// ============================================================================
// 3. SIGNAL MARKER LAYER (screen-space overlay)
// ============================================================================
pub struct SignalMarkerLayer;

impl PlotLayer for SignalMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.visibility.signals || ctx.chart.signals.is_empty() {
            return;
        }

        let bounds = plot_ui.plot_bounds();
        let (x_min, x_max) = (*bounds.range_x().start(), *bounds.range_x().end());

        // Probe the transform before trusting it: map a known in-range point
        // and check finiteness. Unusable mapper -> even-spacing fallback.
        let probe = plot_ui.screen_from_plot(PlotPoint::new(x_min, *bounds.range_y().start()));
        let mapper_ok = probe.x.is_finite() && probe.y.is_finite();

        let screen = plot_ui.ctx().screen_rect();
        let painter = plot_ui
            .ctx()
            .layer_painter(LayerId::new(Order::Foreground, Id::new("signal_markers")));

        let total = ctx.chart.signals.len();
        for (i, signal) in ctx.chart.signals.iter().enumerate() {
            let anchor = if mapper_ok {
                let t = signal.time as f64;
                if t < x_min || t > x_max {
                    continue; // panned out of view
                }
                let pos = plot_ui.screen_from_plot(PlotPoint::new(t, signal.price));
                if !pos.x.is_finite() || !pos.y.is_finite() {
                    continue; // unmappable, silently skip
                }
                pos
            } else {
                let frac = (i as f32 + 0.5) / total as f32;
                Pos2::new(screen.left() + frac * screen.width(), screen.center().y)
            };

            // Screen y grows downward: buys sit below the bar, sells above
            let (offset, color) = match signal.side {
                Side::Buy => (CHART_CONFIG.marker_offset_px, CHART_CONFIG.marker_buy_color),
                Side::Sell => (-CHART_CONFIG.marker_offset_px, CHART_CONFIG.marker_sell_color),
            };
            draw_marker(&painter, Pos2::new(anchor.x, anchor.y + offset), signal.side, color);
        }
    }
}

/// Triangle pointing back at the bar it annotates.
fn draw_marker(painter: &eframe::egui::Painter, center: Pos2, side: Side, color: Color32) {
    let r = CHART_CONFIG.marker_radius_px;
    let pts = match side {
        // Buy sits below the bar, apex up
        Side::Buy => vec![
            Pos2::new(center.x, center.y - r),
            Pos2::new(center.x + r, center.y + r),
            Pos2::new(center.x - r, center.y + r),
        ],
        // Sell sits above the bar, apex down
        Side::Sell => vec![
            Pos2::new(center.x, center.y + r),
            Pos2::new(center.x - r, center.y - r),
            Pos2::new(center.x + r, center.y - r),
        ],
    };
    painter.add(Shape::convex_polygon(pts, color, Stroke::NONE));
}
