use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Chart timeframe. Labels follow exchange shorthand (`5m` .. `1M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
pub enum Timeframe {
    M5,
    M15,
    H1,
    H4,
    #[default]
    D1,
    W1,
    Mo1,
}

impl Timeframe {
    pub fn seconds(&self) -> i64 {
        match self {
            Self::M5 => 5 * 60,
            Self::M15 => 15 * 60,
            Self::H1 => 60 * 60,
            Self::H4 => 4 * 60 * 60,
            Self::D1 => 24 * 60 * 60,
            Self::W1 => 7 * 24 * 60 * 60,
            Self::Mo1 => 30 * 24 * 60 * 60, // approx
        }
    }

    /// Parse an exchange-style label. Unrecognized labels resolve to the
    /// daily timeframe rather than an error, so stale or hand-typed input
    /// still renders something sensible.
    pub fn from_label(label: &str) -> Self {
        match label {
            "5m" => Self::M5,
            "15m" => Self::M15,
            "1h" => Self::H1,
            "4h" => Self::H4,
            "1d" => Self::D1,
            "1w" => Self::W1,
            "1M" => Self::Mo1,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::M5 => write!(f, "5m"),
            Self::M15 => write!(f, "15m"),
            Self::H1 => write!(f, "1h"),
            Self::H4 => write!(f, "4h"),
            Self::D1 => write!(f, "1d"),
            Self::W1 => write!(f, "1w"),
            Self::Mo1 => write!(f, "1M"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_round_trip() {
        for tf in Timeframe::iter() {
            assert_eq!(Timeframe::from_label(&tf.to_string()), tf);
        }
    }

    #[test]
    fn unknown_label_defaults_to_daily() {
        assert_eq!(Timeframe::from_label("3h"), Timeframe::D1);
        assert_eq!(Timeframe::from_label(""), Timeframe::D1);
    }

    #[test]
    fn seconds_mapping() {
        assert_eq!(Timeframe::M5.seconds(), 300);
        assert_eq!(Timeframe::Mo1.seconds(), 2_592_000);
    }
}
