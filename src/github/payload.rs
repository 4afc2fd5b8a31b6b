//! JSON shapes returned by the GitHub REST API
//!
//! Only the fields the dashboard reads are modelled; everything else in
//! the payloads is ignored by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by `repos/{owner}/{repo}` or a repo listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryPayload {
    /// `owner/name`
    pub full_name: String,
    /// Whether the repository is private (billing is only tracked for these)
    #[serde(default)]
    pub private: bool,
}

/// A workflow definition from `repos/{repo}/actions/workflows`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowPayload {
    /// Workflow ID
    pub id: u64,
    /// `active`, `disabled_manually`, `disabled_inactivity`, ...
    pub state: String,
    /// Display name
    pub name: String,
    /// API URL of the workflow
    pub url: String,
}

impl WorkflowPayload {
    /// Whether the workflow is disabled in any way
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.starts_with("disabled")
    }
}

/// A workflow run from `{workflow_url}/runs`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunPayload {
    /// Run ID
    pub id: u64,
    /// When the run was created
    pub created_at: DateTime<Utc>,
    /// When the run was last updated (completion time for finished runs)
    pub updated_at: DateTime<Utc>,
    /// Lifecycle status
    pub status: String,
    /// Outcome, null until completed
    #[serde(default)]
    pub conclusion: Option<String>,
    /// API URL of the run
    pub url: String,
}

/// Billed time on a single runner platform
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformTiming {
    /// Total billed milliseconds
    #[serde(default)]
    pub total_ms: u64,
}

/// The `billable` object from `{run_url}/timing`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillablePayload {
    /// macOS runners
    #[serde(rename = "MACOS", default)]
    pub macos: PlatformTiming,
    /// Windows runners
    #[serde(rename = "WINDOWS", default)]
    pub windows: PlatformTiming,
    /// Linux runners
    #[serde(rename = "UBUNTU", default)]
    pub ubuntu: PlatformTiming,
}

impl BillablePayload {
    /// Sum of billed milliseconds across all platforms
    #[must_use]
    pub const fn total_ms(&self) -> u64 {
        self.macos.total_ms + self.windows.total_ms + self.ubuntu.total_ms
    }
}
