/// REST bar-source constraints: endpoint, per-request timeout, series length.
pub struct BarApiConfig {
    pub endpoint: &'static str,
    pub timeout_ms: u64,
    /// Number of bars requested per load (also the synthetic fallback size)
    pub bar_limit: usize,
}

pub const BAR_API: BarApiConfig = BarApiConfig {
    endpoint: "http://127.0.0.1:8787/api/bars",
    timeout_ms: 5000,
    bar_limit: 260,
};
