//! CLI output formatting
//!
//! Lookback parsing, human-readable durations, and the card grid
//! rendering that turns workflow summaries into terminal output.

pub mod display;
pub mod format;
pub mod lookback;

pub use display::{render_card, render_dashboard, Card, DashboardView};
pub use format::{format_elapsed, pretty_ms};
pub use lookback::{describe_window, parse_lookback};
