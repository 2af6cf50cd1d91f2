use chrono::DateTime;

// web_time falls back to std::time::Instant off-wasm
pub use web_time::Instant as AppInstant;

/// Axis/status label for a unix-seconds timestamp. Daily-and-up timeframes
/// get a date, intraday ones get date + clock time.
pub fn epoch_sec_to_label(epoch_sec: i64, step_secs: i64) -> String {
    let Some(dt) = DateTime::from_timestamp(epoch_sec, 0) else {
        return String::new();
    };
    if step_secs >= 24 * 60 * 60 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%m-%d %H:%M").to_string()
    }
}

/// Compact "how long ago" label for the status line.
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}
