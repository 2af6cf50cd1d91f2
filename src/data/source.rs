// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::BAR_API;
use crate::data::synthetic_bars;
use crate::domain::{Bar, Timeframe, times_strictly_increasing};

/// The one canonical wire schema. Anything that fails to decode into this
/// shape counts as malformed and triggers the demo fallback.
#[derive(Debug, Deserialize)]
pub struct BarsPayload {
    pub ok: bool,
    pub bars: Vec<Bar>,
}

/// Abstract interface for fetching market bars.
#[async_trait]
pub trait BarSource: Send + Sync {
    async fn fetch_bars(&self, timeframe: Timeframe, limit: usize) -> Result<Vec<Bar>>;
}

pub struct RestBarSource {
    endpoint: String,
    client: reqwest::Client,
}

impl RestBarSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(BAR_API.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl BarSource for RestBarSource {
    async fn fetch_bars(&self, timeframe: Timeframe, limit: usize) -> Result<Vec<Bar>> {
        let url = format!(
            "{}?timeframe={}&limit={}",
            self.endpoint, timeframe, limit
        );
        let body = self
            .client
            .get(&url)
            .send()
            .await
            .context("bar request failed")?
            .error_for_status()
            .context("bar request rejected")?
            .text()
            .await
            .context("bar response body unreadable")?;
        decode_bars(&body)
    }
}

/// Decode and validate a raw payload. Validation is strict on purpose: the
/// signal logic assumes ordered, unique timestamps, so a series that breaks
/// that is treated the same as garbage JSON.
pub fn decode_bars(payload: &str) -> Result<Vec<Bar>> {
    let parsed: BarsPayload =
        serde_json::from_str(payload).context("bar payload is not valid JSON")?;
    if !parsed.ok {
        bail!("bar source reported ok=false");
    }
    if parsed.bars.is_empty() {
        bail!("bar source returned an empty series");
    }
    if !times_strictly_increasing(&parsed.bars) {
        bail!("bar timestamps are not strictly increasing");
    }
    Ok(parsed.bars)
}

/// Load a full series for one timeframe. Never fails: any upstream problem is
/// logged and recovered locally with a synthetic series of the same size
/// ("always show something").
pub async fn load_bars(
    source: &dyn BarSource,
    timeframe: Timeframe,
    limit: usize,
) -> (Vec<Bar>, &'static str) {
    match source.fetch_bars(timeframe, limit).await {
        Ok(bars) => (bars, "live"),
        Err(e) => {
            log::warn!("bar source unavailable ({e:#}); serving demo data");
            (synthetic_bars(limit, timeframe), "demo")
        }
    }
}

/// One refresh, end to end: build the client, fetch, fall back. `demo_only`
/// skips the network entirely (the `--demo` CLI flag).
pub async fn fetch_chart_data(
    endpoint: &str,
    timeframe: Timeframe,
    limit: usize,
    demo_only: bool,
) -> (Vec<Bar>, &'static str) {
    if demo_only {
        return (synthetic_bars(limit, timeframe), "demo");
    }
    match RestBarSource::new(endpoint) {
        Ok(source) => load_bars(&source, timeframe, limit).await,
        Err(e) => {
            log::warn!("HTTP client unavailable ({e:#}); serving demo data");
            (synthetic_bars(limit, timeframe), "demo")
        }
    }
}
