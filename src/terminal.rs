//! Terminal width detection

use anyhow::{bail, Result};

/// Columns of the terminal attached to stdout, if any.
#[cfg(unix)]
#[allow(unsafe_code)]
#[must_use]
pub fn detect_width() -> Option<usize> {
    // SAFETY: TIOCGWINSZ only writes into the zeroed winsize we pass in.
    unsafe {
        let mut size: libc::winsize = std::mem::zeroed();
        if libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) == 0 && size.ws_col > 0 {
            Some(usize::from(size.ws_col))
        } else {
            None
        }
    }
}

/// Columns of the terminal attached to stdout, if any.
#[cfg(not(unix))]
#[must_use]
pub const fn detect_width() -> Option<usize> {
    None
}

/// Parse a `COLUMNS` value, ignoring blanks and zero.
fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
}

/// Pick the width to lay out for.
///
/// An explicit width wins, then the attached terminal, then `COLUMNS`.
pub fn resolve_width(explicit: Option<usize>) -> Result<usize> {
    if let Some(width) = explicit {
        return Ok(width);
    }
    if let Some(width) = detect_width() {
        return Ok(width);
    }
    if let Some(width) = parse_columns(std::env::var("COLUMNS").ok().as_deref()) {
        return Ok(width);
    }
    bail!("could not determine terminal width; pass --width")
}
