//! Actions Dashboard - GitHub Actions health at a glance
//!
//! Summarizes recent workflow runs for the repositories of an organization
//! or user: run health, average elapsed time and billable minutes, laid out
//! as a grid of cards sized to the terminal.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod github;
pub mod terminal;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::{parse_lookback, render_dashboard, DashboardView};
pub use config::DashboardConfig;
pub use dashboard::{collect_all, Repository, Selection, Workflow};
pub use github::{ActionsApi, GhClient};
