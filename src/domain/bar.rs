use serde::{Deserialize, Serialize};

// Candle direction, derived from body polarity
#[derive(Debug, PartialEq, Eq)]
pub enum BarKind {
    Bullish,
    Bearish,
}

/// One OHLC bar. `time` is unix seconds, strictly increasing and unique
/// within a series. Bars are replaced wholesale on every refresh and never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Bar {
            time,
            open,
            high,
            low,
            close,
        }
    }

    pub fn kind(&self) -> BarKind {
        if self.close >= self.open {
            BarKind::Bullish
        } else {
            BarKind::Bearish
        }
    }

    // Body low and high as a tuple, regardless of direction
    pub fn body_range(&self) -> (f64, f64) {
        match self.kind() {
            BarKind::Bullish => (self.open, self.close),
            BarKind::Bearish => (self.close, self.open),
        }
    }
}

/// Sanity check on a freshly decoded series: timestamps must be strictly
/// increasing. The OHLC ordering invariant (low <= body <= high) is assumed
/// downstream but deliberately not enforced here.
pub fn times_strictly_increasing(bars: &[Bar]) -> bool {
    bars.windows(2).all(|w| w[0].time < w[1].time)
}
