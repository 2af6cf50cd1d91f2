/// Synthetic bar generator tuning. Used whenever the live bar source is
/// unreachable or hands back a malformed payload, and as the only source on
/// wasm builds.
pub struct DemoConfig {
    pub base_price: f64,
    /// Per-bar random walk magnitude as a fraction of price
    pub walk_pct: f64,
    /// Amplitude of the slow sinusoidal swell as a fraction of price
    pub swell_pct: f64,
    /// Bars per full swell cycle
    pub swell_period_bars: f64,
    /// Intra-bar wick reach as a fraction of price
    pub wick_pct: f64,
}

pub const DEMO: DemoConfig = DemoConfig {
    base_price: 100.0,
    walk_pct: 0.008,
    swell_pct: 0.04,
    swell_period_bars: 64.0,
    wick_pct: 0.004,
};
