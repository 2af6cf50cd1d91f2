use std::f64::consts::TAU;

use rand::Rng;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::config::DEMO;
use crate::domain::{Bar, Timeframe};

/// Generate a synthetic OHLC series: a compounded random walk around the
/// demo base price with a slow sinusoidal swell on top. Timestamps are spaced
/// by the timeframe's second count and end at the most recent bar boundary.
///
/// This is the universal fallback: it runs when the live source is down or
/// malformed, and is the only bar source on wasm builds.
pub fn synthetic_bars(count: usize, timeframe: Timeframe) -> Vec<Bar> {
    let step = timeframe.seconds();
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    let end = now - now.rem_euclid(step);
    let start = end - step * (count.saturating_sub(1)) as i64;

    let mut rng = rand::rng();
    let mut walk = DEMO.base_price;
    let mut prev_close = DEMO.base_price;
    let mut bars = Vec::with_capacity(count);

    for i in 0..count {
        walk *= 1.0 + rng.random_range(-DEMO.walk_pct..DEMO.walk_pct);
        let swell = 1.0 + DEMO.swell_pct * (i as f64 * TAU / DEMO.swell_period_bars).sin();
        let close = walk * swell;
        let open = prev_close;

        let body_high = open.max(close);
        let body_low = open.min(close);
        let high = body_high * (1.0 + rng.random_range(0.0..DEMO.wick_pct));
        let low = body_low * (1.0 - rng.random_range(0.0..DEMO.wick_pct));

        bars.push(Bar::new(start + i as i64 * step, open, high, low, close));
        prev_close = close;
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::times_strictly_increasing;

    #[test]
    fn produces_requested_count_and_spacing() {
        let bars = synthetic_bars(260, Timeframe::M5);
        assert_eq!(bars.len(), 260);
        assert!(times_strictly_increasing(&bars));
        assert!(bars.windows(2).all(|w| w[1].time - w[0].time == 300));
    }

    #[test]
    fn ohlc_shape_holds() {
        for bar in synthetic_bars(100, Timeframe::D1) {
            assert!(bar.low <= bar.open.min(bar.close));
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.close > 0.0);
        }
    }

    #[test]
    fn zero_count_is_fine() {
        assert!(synthetic_bars(0, Timeframe::H1).is_empty());
    }
}
