use crate::domain::Bar;
use crate::indicators::EmaPoint;

/// One point of a split series. `None` is an explicit absent marker: the
/// renderer must break the line there instead of interpolating across.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPoint {
    pub time: i64,
    pub value: Option<f64>,
}

/// The EMA line split into two mutually exclusive polarity series. Rendering
/// both superimposed reproduces one line whose color flips wherever price
/// crosses the EMA, with no visible gap at the flip bar.
#[derive(Debug, Clone, Default)]
pub struct TrendSplit {
    /// Carries the EMA value while `close >= ema`
    pub above: Vec<SplitPoint>,
    /// Carries the EMA value while `close < ema`
    pub below: Vec<SplitPoint>,
}

fn trend_sign(bar: &Bar, ema: &EmaPoint) -> i8 {
    if bar.close >= ema.value { 1 } else { -1 }
}

/// Split one EMA series by trend polarity.
///
/// Natural pass: each index writes its EMA value into the series matching its
/// polarity and an absent marker into the other. Bridge pass: at every flip,
/// one extra point for the *next* bar is appended to the outgoing series so
/// the outgoing color extends exactly to the flip point. Bridges are written
/// after all natural entries, so last-write-wins dedup keeps them; final sort
/// restores time order.
///
/// `bars` and `ema` must be index-aligned; the shorter length wins.
pub fn split_by_trend(bars: &[Bar], ema: &[EmaPoint]) -> TrendSplit {
    let len = bars.len().min(ema.len());
    let mut split = TrendSplit {
        above: Vec::with_capacity(len + 8),
        below: Vec::with_capacity(len + 8),
    };

    for i in 0..len {
        let (on, off) = if trend_sign(&bars[i], &ema[i]) > 0 {
            (&mut split.above, &mut split.below)
        } else {
            (&mut split.below, &mut split.above)
        };
        on.push(SplitPoint {
            time: ema[i].time,
            value: Some(ema[i].value),
        });
        off.push(SplitPoint {
            time: ema[i].time,
            value: None,
        });
    }

    // Bridge stitch: extend the outgoing polarity one bar into the flip
    for i in 0..len.saturating_sub(1) {
        let now = trend_sign(&bars[i], &ema[i]);
        let next = trend_sign(&bars[i + 1], &ema[i + 1]);
        if now == next {
            continue;
        }
        let outgoing = if now > 0 {
            &mut split.above
        } else {
            &mut split.below
        };
        outgoing.push(SplitPoint {
            time: ema[i + 1].time,
            value: Some(ema[i + 1].value),
        });
    }

    dedup_last_write(&mut split.above);
    dedup_last_write(&mut split.below);
    split
}

/// Keep the last-written entry per timestamp, then sort ascending by time.
fn dedup_last_write(series: &mut Vec<SplitPoint>) {
    let mut kept: Vec<SplitPoint> = Vec::with_capacity(series.len());
    for point in series.drain(..) {
        match kept.iter_mut().find(|p| p.time == point.time) {
            Some(existing) => *existing = point,
            None => kept.push(point),
        }
    }
    kept.sort_by_key(|p| p.time);
    *series = kept;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::ema;

    fn bar(time: i64, close: f64) -> Bar {
        Bar::new(time, close, close + 1.0, close - 1.0, close)
    }

    /// Closes that ride above a flat-ish EMA, dip under it, then recover.
    fn flip_fixture() -> (Vec<Bar>, Vec<EmaPoint>) {
        let closes = [100.0, 102.0, 104.0, 96.0, 94.0, 95.0, 104.0, 106.0];
        let bars: Vec<Bar> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| bar(i as i64 * 60, c))
            .collect();
        let ema = ema(&bars, 3);
        (bars, ema)
    }

    #[test]
    fn series_are_sorted_and_unique() {
        let (bars, ema) = flip_fixture();
        let split = split_by_trend(&bars, &ema);
        for series in [&split.above, &split.below] {
            assert!(series.windows(2).all(|w| w[0].time < w[1].time));
            assert_eq!(series.len(), bars.len());
        }
    }

    #[test]
    fn exactly_one_polarity_carries_each_bar_except_bridges() {
        let (bars, ema) = flip_fixture();
        let split = split_by_trend(&bars, &ema);

        let flips: Vec<i64> = (0..bars.len() - 1)
            .filter(|&i| {
                (bars[i].close >= ema[i].value) != (bars[i + 1].close >= ema[i + 1].value)
            })
            .map(|i| bars[i + 1].time)
            .collect();
        assert!(!flips.is_empty(), "fixture must actually flip");

        for (i, bar) in bars.iter().enumerate() {
            let above = split.above[i].value.is_some();
            let below = split.below[i].value.is_some();
            if flips.contains(&bar.time) {
                // Bridged boundary: both series hold a real value
                assert!(above && below, "bridge missing at t={}", bar.time);
            } else {
                assert!(above ^ below, "polarity not exclusive at t={}", bar.time);
            }
        }
    }

    #[test]
    fn bridge_carries_the_flip_bars_ema_value() {
        let (bars, ema) = flip_fixture();
        let split = split_by_trend(&bars, &ema);

        // First flip in the fixture is down (above -> below)
        let flip_idx = (0..bars.len() - 1)
            .find(|&i| {
                (bars[i].close >= ema[i].value) && !(bars[i + 1].close >= ema[i + 1].value)
            })
            .unwrap();
        let t = bars[flip_idx + 1].time;
        let bridged = split.above.iter().find(|p| p.time == t).unwrap();
        assert_eq!(bridged.value, Some(ema[flip_idx + 1].value));
    }

    #[test]
    fn empty_input() {
        let split = split_by_trend(&[], &[]);
        assert!(split.above.is_empty() && split.below.is_empty());
    }
}
