use crate::config::{IndicatorProfile, indicator_profile};
use crate::domain::{Bar, Timeframe};
use crate::indicators::{
    EmaPoint, Signal, TrendSplit, detect_crossovers, ema, split_by_trend,
};

/// Everything derived from the current bar series, owned as one unit rather
/// than module-level globals so several chart widgets could coexist. Each
/// refresh replaces the bars and recomputes the whole pipeline; nothing is
/// patched incrementally.
pub struct ChartState {
    pub timeframe: Timeframe,
    pub profile: IndicatorProfile,
    pub bars: Vec<Bar>,
    pub fast_ema: Vec<EmaPoint>,
    pub slow_ema: Vec<EmaPoint>,
    pub split: TrendSplit,
    pub signals: Vec<Signal>,
    /// Where the current bars came from: "live" or "demo"
    pub source: &'static str,
}

impl ChartState {
    pub fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            profile: indicator_profile(timeframe),
            bars: Vec::new(),
            fast_ema: Vec::new(),
            slow_ema: Vec::new(),
            split: TrendSplit::default(),
            signals: Vec::new(),
            source: "none",
        }
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if self.timeframe == timeframe {
            return;
        }
        self.timeframe = timeframe;
        self.profile = indicator_profile(timeframe);
        self.recompute();
    }

    pub fn replace_bars(&mut self, bars: Vec<Bar>, source: &'static str) {
        self.bars = bars;
        self.source = source;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.fast_ema = ema(&self.bars, self.profile.ema_period);
        self.slow_ema = ema(&self.bars, self.profile.aux_period);
        // Ribbon polarity tracks price vs. the fast EMA
        self.split = split_by_trend(&self.bars, &self.fast_ema);
        self.signals = detect_crossovers(
            &self.bars,
            &self.fast_ema,
            &self.slow_ema,
            self.profile.cooldown,
        );
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synthetic_bars;

    #[test]
    fn replace_bars_recomputes_everything_in_lockstep() {
        let mut chart = ChartState::new(Timeframe::D1);
        chart.replace_bars(synthetic_bars(120, Timeframe::D1), "demo");
        assert_eq!(chart.fast_ema.len(), 120);
        assert_eq!(chart.slow_ema.len(), 120);
        assert_eq!(chart.split.above.len(), 120);
        assert_eq!(chart.split.below.len(), 120);
        assert_eq!(chart.source, "demo");

        // A new refresh replaces the set wholesale
        chart.replace_bars(synthetic_bars(50, Timeframe::D1), "live");
        assert_eq!(chart.bars.len(), 50);
        assert_eq!(chart.fast_ema.len(), 50);
        assert_eq!(chart.source, "live");
    }

    #[test]
    fn timeframe_switch_swaps_the_profile() {
        let mut chart = ChartState::new(Timeframe::D1);
        chart.replace_bars(synthetic_bars(80, Timeframe::D1), "demo");
        assert_eq!(chart.profile.cooldown, 14);
        chart.set_timeframe(Timeframe::Mo1);
        assert_eq!(chart.profile.cooldown, 4);
        // Pipeline re-ran against the same bars
        assert_eq!(chart.fast_ema.len(), 80);
    }
}
