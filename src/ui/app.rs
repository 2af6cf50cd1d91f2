use std::sync::mpsc::{self, Receiver, Sender};

use eframe::{
    Frame, Storage,
    egui::{CentralPanel, ComboBox, Context, Key, TopBottomPanel, Visuals},
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    Cli,
    config::BAR_API,
    domain::{Bar, Timeframe},
    ui::{chart::ChartState, plot_view},
    utils::{AppInstant, format_elapsed},
};

#[cfg(not(target_arch = "wasm32"))]
use {crate::data::fetch_chart_data, std::thread, tokio::runtime::Runtime};

#[cfg(target_arch = "wasm32")]
use crate::data::synthetic_bars;

/// Layer toggles, persisted across sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotVisibility {
    pub candles: bool,
    pub ribbon: bool,
    pub slow_ema: bool,
    pub signals: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            candles: true,
            ribbon: true,
            slow_ema: true,
            signals: true,
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    timeframe: Timeframe, // persists across sessions
    pub(crate) plot_visibility: PlotVisibility,

    #[serde(skip)]
    chart: ChartState,
    #[serde(skip)]
    endpoint: String,
    #[serde(skip)]
    bar_limit: usize,
    #[serde(skip)]
    demo_only: bool,
    #[serde(skip)]
    data_tx: Option<Sender<(Vec<Bar>, &'static str)>>,
    #[serde(skip)]
    data_rx: Option<Receiver<(Vec<Bar>, &'static str)>>,
    #[serde(skip)]
    loading: bool,
    #[serde(skip)]
    last_update: Option<AppInstant>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::default(),
            plot_visibility: PlotVisibility::default(),
            chart: ChartState::new(Timeframe::default()),
            endpoint: BAR_API.endpoint.to_string(),
            bar_limit: BAR_API.bar_limit,
            demo_only: false,
            data_tx: None,
            data_rx: None,
            loading: false,
            last_update: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };
        cc.egui_ctx.set_visuals(Visuals::dark());

        // CLI wins over persisted preferences when given
        if let Some(label) = &args.timeframe {
            app.timeframe = Timeframe::from_label(label);
        }
        if let Some(endpoint) = args.endpoint {
            app.endpoint = endpoint;
        }
        if let Some(bars) = args.bars {
            app.bar_limit = bars;
        }
        app.demo_only = args.demo;
        app.chart = ChartState::new(app.timeframe);

        let (data_tx, data_rx) = mpsc::channel();
        app.data_tx = Some(data_tx);
        app.data_rx = Some(data_rx);
        app.request_refresh();
        app
    }

    /// Kick off one load. A refresh issued while another is in flight just
    /// starts an independent fetch; whichever response lands last wins. No
    /// cancellation, no generation counters.
    fn request_refresh(&mut self) {
        let Some(tx) = self.data_tx.clone() else {
            return;
        };
        self.loading = true;

        let timeframe = self.chart.timeframe;
        let limit = self.bar_limit;

        #[cfg(not(target_arch = "wasm32"))]
        {
            let endpoint = self.endpoint.clone();
            let demo_only = self.demo_only;
            thread::spawn(move || {
                let rt = Runtime::new().expect("Failed to create runtime");
                rt.block_on(async move {
                    let data = fetch_chart_data(&endpoint, timeframe, limit, demo_only).await;
                    let _ = tx.send(data);
                });
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            // Browser build has no bar endpoint wired up; demo data only
            let _ = tx.send((synthetic_bars(limit, timeframe), "demo"));
        }
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let refresh = ctx.input(|i| {
            if i.key_pressed(Key::Num1) {
                self.plot_visibility.candles = !self.plot_visibility.candles;
            }
            if i.key_pressed(Key::Num2) {
                self.plot_visibility.ribbon = !self.plot_visibility.ribbon;
            }
            if i.key_pressed(Key::Num3) {
                self.plot_visibility.slow_ema = !self.plot_visibility.slow_ema;
            }
            if i.key_pressed(Key::Num4) {
                self.plot_visibility.signals = !self.plot_visibility.signals;
            }
            i.key_pressed(Key::R)
        });
        if refresh {
            self.request_refresh();
        }
    }

    fn controls_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Signal Scope");
                ui.separator();

                let mut selected = self.timeframe;
                ComboBox::from_label("Timeframe")
                    .selected_text(selected.to_string())
                    .show_ui(ui, |ui| {
                        for tf in Timeframe::iter() {
                            ui.selectable_value(&mut selected, tf, tf.to_string());
                        }
                    });
                if selected != self.timeframe {
                    self.timeframe = selected;
                    self.chart.set_timeframe(selected);
                    self.request_refresh();
                }

                if ui.button("Refresh").clicked() {
                    self.request_refresh();
                }

                ui.separator();
                let status = if self.loading {
                    "loading...".to_string()
                } else {
                    let age = self
                        .last_update
                        .map(|t| format_elapsed(t.elapsed().as_secs()))
                        .unwrap_or_else(|| "-".to_string());
                    format!(
                        "{} bars | {} signals | source: {} | updated {} ago",
                        self.chart.bars.len(),
                        self.chart.signals.len(),
                        self.chart.source,
                        age
                    )
                };
                ui.label(status);
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if let Some(rx) = self.data_rx.take() {
            // Drain everything queued; the response that landed last wins
            while let Ok((bars, source)) = rx.try_recv() {
                self.chart.replace_bars(bars, source);
                self.loading = false;
                self.last_update = Some(AppInstant::now());
            }
            self.data_rx = Some(rx);
        }

        self.handle_global_shortcuts(ctx);
        self.controls_bar(ctx);

        CentralPanel::default().show(ctx, |ui| {
            if self.chart.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for bar data...");
                });
            } else {
                plot_view::render_plot(ui, &self.chart, &self.plot_visibility);
            }
        });

        if self.loading {
            // Keep polling the data channel while a fetch is in flight
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
