//! Run records and the lookback filter
//!
//! A `Run` is one workflow execution as reported by the Actions API.
//! `filter_recent` keeps only completed runs that finished inside the
//! lookback window.

use chrono::{DateTime, TimeDelta, Utc};

use crate::github::payload::RunPayload;

/// Lifecycle state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Waiting for a runner
    Queued,
    /// Currently executing
    InProgress,
    /// Finished; `conclusion` is meaningful
    Completed,
    /// Any other status string the API reports (waiting, requested, ...)
    Other(String),
}

impl From<&str> for RunStatus {
    fn from(s: &str) -> Self {
        match s {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Final outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conclusion {
    /// All jobs passed
    Success,
    /// At least one job failed
    Failure,
    /// Run was skipped
    Skipped,
    /// Run was cancelled
    Cancelled,
    /// Neutral outcome
    Neutral,
    /// Run exceeded its time limit
    TimedOut,
    /// Run is waiting on a manual action
    ActionRequired,
    /// Any other conclusion string, including stale/startup_failure
    Other(String),
}

impl From<&str> for Conclusion {
    fn from(s: &str) -> Self {
        match s {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "skipped" => Self::Skipped,
            "cancelled" => Self::Cancelled,
            "neutral" => Self::Neutral,
            "timed_out" => Self::TimedOut,
            "action_required" => Self::ActionRequired,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One CI execution of a workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Lifecycle state
    pub status: RunStatus,
    /// Outcome, `None` until the run completes
    pub conclusion: Option<Conclusion>,
    /// When the run finished (last update time)
    pub finished_at: DateTime<Utc>,
    /// Wall-clock time from creation to completion; zero if not completed
    pub elapsed: TimeDelta,
    /// API URL of the run, used to fetch timing/billing data
    pub url: String,
}

impl Run {
    /// Whether the run has finished
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

impl From<&RunPayload> for Run {
    fn from(payload: &RunPayload) -> Self {
        let status = RunStatus::from(payload.status.as_str());
        let elapsed = if status == RunStatus::Completed {
            payload.updated_at - payload.created_at
        } else {
            TimeDelta::zero()
        };

        Self {
            status,
            conclusion: payload.conclusion.as_deref().map(Conclusion::from),
            finished_at: payload.updated_at,
            elapsed,
            url: payload.url.clone(),
        }
    }
}

/// Keep completed runs that finished less than `window` before `now`.
///
/// Input order is preserved. Runs that are not completed are dropped.
#[must_use]
pub fn filter_recent(runs: Vec<Run>, window: TimeDelta, now: DateTime<Utc>) -> Vec<Run> {
    runs.into_iter()
        .filter(|r| r.is_completed() && now - r.finished_at < window)
        .collect()
}
