#[cfg(not(target_arch = "wasm32"))]
mod source;
mod synthetic;

pub use synthetic::synthetic_bars;

#[cfg(not(target_arch = "wasm32"))]
pub use source::{BarSource, BarsPayload, RestBarSource, decode_bars, fetch_chart_data, load_bars};
