//! Workflow and repository summaries

use chrono::TimeDelta;

use super::elapsed::average_elapsed;
use super::health::{summarize_health, HealthSymbol};
use super::run::Run;

/// One CI workflow with its recent runs and billed time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    /// Display name
    pub name: String,
    /// Runs that survived the lookback filter, in API order
    pub runs: Vec<Run>,
    /// Billed milliseconds for `runs`; zero for public repositories
    pub billable_ms: u64,
}

impl Workflow {
    /// Create a workflow summary
    #[must_use]
    pub fn new(name: &str, runs: Vec<Run>, billable_ms: u64) -> Self {
        Self {
            name: name.to_string(),
            runs,
            billable_ms,
        }
    }

    /// Health symbols for the most recent runs
    #[must_use]
    pub fn health(&self, max_runs: usize) -> Vec<HealthSymbol> {
        summarize_health(&self.runs, max_runs)
    }

    /// Average elapsed time of the most recent runs
    #[must_use]
    pub fn average_elapsed(&self, max_runs: usize) -> TimeDelta {
        average_elapsed(&self.runs, max_runs)
    }
}

/// One repository and the workflows discovered in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// `owner/name`
    pub name: String,
    /// Whether billed time is tracked
    pub private: bool,
    /// Workflows in discovery order; empty until collected
    pub workflows: Vec<Workflow>,
}

impl Repository {
    /// Create a repository with no workflows yet
    #[must_use]
    pub fn new(name: &str, private: bool) -> Self {
        Self {
            name: name.to_string(),
            private,
            workflows: Vec::new(),
        }
    }

    /// Billed milliseconds across every workflow in this repository
    #[must_use]
    pub fn billable_ms(&self) -> u64 {
        self.workflows.iter().map(|w| w.billable_ms).sum()
    }
}

/// Billed milliseconds across all repositories, for the dashboard header
#[must_use]
pub fn total_billable_ms(repositories: &[Repository]) -> u64 {
    repositories.iter().map(Repository::billable_ms).sum()
}
