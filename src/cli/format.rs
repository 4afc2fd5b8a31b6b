//! Human-readable duration formatting

use chrono::TimeDelta;

/// Format a duration compactly, e.g. `1h2m3s`, `4m0s`, `45s`, `0s`.
///
/// Sub-second precision is dropped.
#[must_use]
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    if total <= 0 {
        return "0s".to_string();
    }

    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}h{mins}m{secs}s")
    } else if mins > 0 {
        format!("{mins}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Format milliseconds as space-separated units, e.g. `1h 2m 3s` or `250ms`.
///
/// Zero-valued units are omitted; milliseconds only show below one second.
#[must_use]
pub fn pretty_ms(ms: u64) -> String {
    if ms < 1000 {
        return format!("{ms}ms");
    }

    let total_secs = ms / 1000;
    let parts = [
        (total_secs / 86_400, "d"),
        ((total_secs % 86_400) / 3600, "h"),
        ((total_secs % 3600) / 60, "m"),
        (total_secs % 60, "s"),
    ];

    parts
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}
