//! The numeric core: EMA, trend-polarity split, crossover signals.
//! Everything here is a synchronous pass over one refresh's bars; outputs are
//! recomputed wholesale and never patched incrementally.

mod crossover;
mod ema;
mod trend_split;

pub use crossover::{Side, Signal, detect_crossovers};
pub use ema::{EmaPoint, ema};
pub use trend_split::{SplitPoint, TrendSplit, split_by_trend};
