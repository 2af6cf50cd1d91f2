use itertools::Itertools;

use crate::config::MAX_SIGNALS;
use crate::domain::Bar;
use crate::indicators::EmaPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

/// A fast/slow EMA crossover event. Buys are priced at the triggering bar's
/// low, sells at its high (worst-case-ish entry marking, kept as-is).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub time: i64,
    pub price: f64,
    pub side: Side,
}

/// Detect fast/slow EMA crossovers with a minimum-bar cooldown.
///
/// The cooldown gate runs *before* the crossover test: a crossover landing
/// inside the window is dropped outright and does not restart the window.
/// Output is ascending in time and capped to the most recent
/// [`MAX_SIGNALS`] entries (oldest dropped).
pub fn detect_crossovers(
    bars: &[Bar],
    fast: &[EmaPoint],
    slow: &[EmaPoint],
    cooldown: usize,
) -> Vec<Signal> {
    let len = bars.len().min(fast.len()).min(slow.len());
    let diffs: Vec<f64> = fast[..len]
        .iter()
        .zip(&slow[..len])
        .map(|(f, s)| f.value - s.value)
        .collect();

    let mut signals: Vec<Signal> = Vec::new();
    let mut last_emit: Option<usize> = None;

    for (j, (prev, now)) in diffs.iter().copied().tuple_windows().enumerate() {
        let i = j + 1;
        if last_emit.is_some_and(|last| i - last < cooldown) {
            continue;
        }

        let side = if prev <= 0.0 && now > 0.0 {
            Some(Side::Buy)
        } else if prev >= 0.0 && now < 0.0 {
            Some(Side::Sell)
        } else {
            None
        };

        if let Some(side) = side {
            let price = match side {
                Side::Buy => bars[i].low,
                Side::Sell => bars[i].high,
            };
            signals.push(Signal {
                time: bars[i].time,
                price,
                side,
            });
            last_emit = Some(i);
        }
    }

    if signals.len() > MAX_SIGNALS {
        signals.drain(..signals.len() - MAX_SIGNALS);
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: i64, close: f64) -> Bar {
        Bar::new(time, close, close + 2.0, close - 2.0, close)
    }

    fn point(time: i64, value: f64) -> EmaPoint {
        EmaPoint { time, value }
    }

    /// Hand-built fast/slow pair: fast crosses up at i=2 and down at i=5.
    fn crossing_fixture() -> (Vec<Bar>, Vec<EmaPoint>, Vec<EmaPoint>) {
        let fast = [9.0, 10.0, 11.0, 11.0, 10.5, 9.0, 8.5];
        let slow = [10.0; 7];
        let bars: Vec<Bar> = (0..7).map(|i| bar(i * 60, 10.0)).collect();
        let fast = fast
            .iter()
            .enumerate()
            .map(|(i, &v)| point(i as i64 * 60, v))
            .collect();
        let slow = slow
            .iter()
            .enumerate()
            .map(|(i, &v)| point(i as i64 * 60, v))
            .collect();
        (bars, fast, slow)
    }

    #[test]
    fn emits_buy_then_sell_at_asymmetric_prices() {
        let (bars, fast, slow) = crossing_fixture();
        let signals = detect_crossovers(&bars, &fast, &slow, 1);
        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].side, Side::Buy);
        assert_eq!(signals[0].time, 120);
        assert_eq!(signals[0].price, bars[2].low);
        assert_eq!(signals[1].side, Side::Sell);
        assert_eq!(signals[1].time, 300);
        assert_eq!(signals[1].price, bars[5].high);
        assert!(signals[0].time < signals[1].time);
    }

    #[test]
    fn cooldown_suppresses_the_second_crossover() {
        let (bars, fast, slow) = crossing_fixture();
        // Sell lands 3 bars after the buy; a 4-bar cooldown must eat it
        let signals = detect_crossovers(&bars, &fast, &slow, 4);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].side, Side::Buy);
    }

    #[test]
    fn cooldown_holds_for_every_emitted_pair() {
        // Oscillate fast around slow every other bar
        let n = 200;
        let bars: Vec<Bar> = (0..n).map(|i| bar(i as i64 * 60, 10.0)).collect();
        let slow: Vec<EmaPoint> = (0..n).map(|i| point(i as i64 * 60, 10.0)).collect();
        let fast: Vec<EmaPoint> = (0..n)
            .map(|i| point(i as i64 * 60, if i % 2 == 0 { 9.0 } else { 11.0 }))
            .collect();

        for cooldown in [1usize, 3, 7, 13] {
            let signals = detect_crossovers(&bars, &fast, &slow, cooldown);
            let idx: Vec<usize> = signals.iter().map(|s| (s.time / 60) as usize).collect();
            assert!(
                idx.windows(2).all(|w| w[1] - w[0] >= cooldown),
                "cooldown {} violated: {:?}",
                cooldown,
                idx
            );
        }
    }

    #[test]
    fn keeps_only_the_most_recent_thirty() {
        let n = 200; // ~100 crossovers at cooldown 0
        let bars: Vec<Bar> = (0..n).map(|i| bar(i as i64 * 60, 10.0)).collect();
        let slow: Vec<EmaPoint> = (0..n).map(|i| point(i as i64 * 60, 10.0)).collect();
        let fast: Vec<EmaPoint> = (0..n)
            .map(|i| point(i as i64 * 60, if i % 2 == 0 { 9.0 } else { 11.0 }))
            .collect();

        let signals = detect_crossovers(&bars, &fast, &slow, 0);
        assert_eq!(signals.len(), MAX_SIGNALS);
        // Most recent kept, ascending order
        assert!(signals.windows(2).all(|w| w[0].time < w[1].time));
        assert_eq!(signals.last().unwrap().time, (n as i64 - 1) * 60);
    }

    #[test]
    fn flat_series_emits_nothing() {
        let bars: Vec<Bar> = (0..10).map(|i| bar(i * 60, 10.0)).collect();
        let flat: Vec<EmaPoint> = (0..10).map(|i| point(i * 60, 10.0)).collect();
        assert!(detect_crossovers(&bars, &flat, &flat, 5).is_empty());
    }
}
