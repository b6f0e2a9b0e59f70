//! Human-readable figures for the end-of-run summary.

use std::time::Duration;

const UNITS: &[&str] = &["bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count in the largest unit that keeps it readable,
/// e.g. `102 bytes`, `1.59 KB`.
pub fn human_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}

/// Formats a duration as its leading non-zero components, e.g. `1m 2s 3ms`.
pub fn human_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    let ms = total_ms % 1000;
    let secs = (total_ms / 1000) % 60;
    let mins = (total_ms / 60_000) % 60;
    let hours = (total_ms / 3_600_000) % 24;
    let days = total_ms / 86_400_000;

    let mut nice = String::new();
    if days > 0 {
        nice.push_str(&format!("{days}d "));
    }
    if total_ms >= 3_600_000 {
        nice.push_str(&format!("{hours}h "));
    }
    if total_ms >= 60_000 {
        nice.push_str(&format!("{mins}m "));
    }
    if total_ms >= 1000 {
        nice.push_str(&format!("{secs}s "));
    }

    format!("{nice}{ms}ms")
}
