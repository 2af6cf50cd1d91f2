use crate::domain::Timeframe;

/// EMA periods and signal cooldown for one timeframe. `ema_period` drives the
/// fast EMA (and the trend ribbon); `aux_period` is the slow crossover leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorProfile {
    pub ema_period: usize,
    pub aux_period: usize,
    /// Minimum bar-index gap between two emitted signals
    pub cooldown: usize,
}

/// Display-volume cap on the signal list: only the most recent N signals are
/// kept so the marker overlay stays bounded. Not a correctness constraint.
pub const MAX_SIGNALS: usize = 30;

/// Static per-timeframe tuning table. Faster timeframes get slightly tighter
/// periods; slower ones get shorter cooldowns since each bar covers more time.
pub fn indicator_profile(timeframe: Timeframe) -> IndicatorProfile {
    match timeframe {
        Timeframe::M5 => IndicatorProfile { ema_period: 9, aux_period: 21, cooldown: 8 },
        Timeframe::M15 => IndicatorProfile { ema_period: 9, aux_period: 21, cooldown: 10 },
        Timeframe::H1 => IndicatorProfile { ema_period: 10, aux_period: 21, cooldown: 12 },
        Timeframe::H4 => IndicatorProfile { ema_period: 10, aux_period: 21, cooldown: 12 },
        Timeframe::D1 => IndicatorProfile { ema_period: 10, aux_period: 21, cooldown: 14 },
        Timeframe::W1 => IndicatorProfile { ema_period: 8, aux_period: 17, cooldown: 6 },
        Timeframe::Mo1 => IndicatorProfile { ema_period: 6, aux_period: 13, cooldown: 4 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_row_matches_product_defaults() {
        let p = indicator_profile(Timeframe::D1);
        assert_eq!(p, IndicatorProfile { ema_period: 10, aux_period: 21, cooldown: 14 });
    }

    #[test]
    fn unknown_label_lands_on_daily_row() {
        let p = indicator_profile(Timeframe::from_label("7h"));
        assert_eq!(p.cooldown, 14);
    }
}
