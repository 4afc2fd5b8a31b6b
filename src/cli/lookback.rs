//! Lookback window parsing
//!
//! Accepts `<n>d` (whole days) or `<n>h` (hours, fractions allowed), e.g.
//! `30d`, `1h`, `1.5h`.

use anyhow::{bail, Context, Result};
use chrono::TimeDelta;

const UNIT_HINT: &str = "report duration should be in hours or days (eg 1h or 30d)";

/// Parse a lookback string into a positive duration.
pub fn parse_lookback(value: &str) -> Result<TimeDelta> {
    let value = value.trim();
    let Some(unit) = value.chars().last() else {
        bail!(UNIT_HINT);
    };
    let amount = &value[..value.len() - unit.len_utf8()];

    let window = match unit {
        'd' => {
            let days: i64 = amount
                .parse()
                .with_context(|| format!("could not parse number '{amount}'"))?;
            TimeDelta::try_days(days).context("report duration is too large")?
        }
        'h' => {
            let hours: f64 = amount
                .parse()
                .with_context(|| format!("could not parse number '{amount}'"))?;
            if !hours.is_finite() || hours.abs() > 1e9 {
                bail!("report duration is too large");
            }
            #[allow(clippy::cast_possible_truncation)]
            let millis = (hours * 3_600_000.0).round() as i64;
            TimeDelta::milliseconds(millis)
        }
        _ => bail!(UNIT_HINT),
    };

    if window <= TimeDelta::zero() {
        bail!("report duration must be greater than zero, got '{value}'");
    }

    Ok(window)
}

/// Describe a window for the dashboard title, e.g. `30 days` or `6 hours`.
#[must_use]
pub fn describe_window(window: TimeDelta) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("{n} {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };

    if window.num_days() > 0 && window.num_seconds() % 86_400 == 0 {
        plural(window.num_days(), "day")
    } else if window.num_hours() > 0 {
        plural(window.num_hours(), "hour")
    } else {
        plural(window.num_minutes(), "minute")
    }
}
