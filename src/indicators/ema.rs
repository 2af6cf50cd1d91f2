use crate::domain::Bar;

/// One EMA sample, index-aligned with the bar it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaPoint {
    pub time: i64,
    pub value: f64,
}

/// Exponential moving average over bar closes.
///
/// Smoothing constant `k = 2 / (p + 1)`. The first output seeds directly from
/// the first close (no SMA warm-up), so the output is always the same length
/// as the input. Periods below 2 clamp to 2. Non-finite closes flow through
/// untouched; a pure fold, never fails.
pub fn ema(bars: &[Bar], period: usize) -> Vec<EmaPoint> {
    let period = period.max(2);
    let k = 2.0 / (period as f64 + 1.0);

    let mut out = Vec::with_capacity(bars.len());
    let mut prev = match bars.first() {
        Some(b) => b.close,
        None => return out,
    };
    out.push(EmaPoint {
        time: bars[0].time,
        value: prev,
    });

    for bar in &bars[1..] {
        let value = bar.close * k + prev * (1.0 - k);
        out.push(EmaPoint {
            time: bar.time,
            value,
        });
        prev = value;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: i64, close: f64) -> Bar {
        Bar::new(time, close, close, close, close)
    }

    #[test]
    fn seeds_from_first_close() {
        let bars: Vec<Bar> = (0..20).map(|i| bar(i, 100.0 + i as f64)).collect();
        let out = ema(&bars, 10);
        assert_eq!(out.len(), bars.len());
        assert_eq!(out[0].value, bars[0].close);
        assert_eq!(out[0].time, bars[0].time);
    }

    #[test]
    fn recursion_matches_hand_computation() {
        // p = 3 -> k = 0.5
        let bars = vec![bar(0, 10.0), bar(1, 12.0), bar(2, 14.0)];
        let out = ema(&bars, 3);
        assert_eq!(out[1].value, 12.0 * 0.5 + 10.0 * 0.5);
        assert_eq!(out[2].value, 14.0 * 0.5 + out[1].value * 0.5);
    }

    #[test]
    fn short_period_clamps_to_two() {
        let bars = vec![bar(0, 10.0), bar(1, 16.0)];
        // p = 0 and p = 2 must agree (k = 2/3)
        assert_eq!(ema(&bars, 0), ema(&bars, 2));
        let out = ema(&bars, 2);
        assert!((out[1].value - (16.0 * (2.0 / 3.0) + 10.0 * (1.0 / 3.0))).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(ema(&[], 10).is_empty());
    }

    #[test]
    fn non_finite_closes_propagate() {
        let bars = vec![bar(0, 10.0), bar(1, f64::NAN), bar(2, 11.0)];
        let out = ema(&bars, 5);
        assert_eq!(out.len(), 3);
        assert!(out[1].value.is_nan());
        assert!(out[2].value.is_nan()); // poisons the rest of the fold
    }
}
