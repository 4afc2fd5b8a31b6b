//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{bail, Result};
use chrono::{DateTime, TimeDelta, Utc};

use crate::dashboard::run::{Conclusion, Run, RunStatus};
use crate::github::payload::{
    BillablePayload, PlatformTiming, RepositoryPayload, RunPayload, WorkflowPayload,
};
use crate::github::ActionsApi;

/// Create a `Run` with the given status and conclusion.
#[must_use]
pub fn make_run(
    status: RunStatus,
    conclusion: Option<&str>,
    finished_at: DateTime<Utc>,
    elapsed_secs: i64,
) -> Run {
    Run {
        status,
        conclusion: conclusion.map(Conclusion::from),
        finished_at,
        elapsed: TimeDelta::seconds(elapsed_secs),
        url: String::new(),
    }
}

/// Create a completed `Run` with the given conclusion.
#[must_use]
pub fn completed_run(conclusion: &str, finished_at: DateTime<Utc>, elapsed_secs: i64) -> Run {
    make_run(
        RunStatus::Completed,
        Some(conclusion),
        finished_at,
        elapsed_secs,
    )
}

/// Create a `RunPayload` that finished at `finished_at` after `elapsed_secs`.
#[must_use]
pub fn run_payload(
    url: &str,
    status: &str,
    conclusion: Option<&str>,
    finished_at: DateTime<Utc>,
    elapsed_secs: i64,
) -> RunPayload {
    RunPayload {
        id: 0,
        created_at: finished_at - TimeDelta::seconds(elapsed_secs),
        updated_at: finished_at,
        status: status.to_string(),
        conclusion: conclusion.map(ToString::to_string),
        url: url.to_string(),
    }
}

/// Create a `WorkflowPayload`.
#[must_use]
pub fn workflow_payload(name: &str, state: &str, url: &str) -> WorkflowPayload {
    WorkflowPayload {
        id: 0,
        state: state.to_string(),
        name: name.to_string(),
        url: url.to_string(),
    }
}

fn repository_payloads(repos: &[(&str, bool)]) -> Vec<RepositoryPayload> {
    repos
        .iter()
        .map(|(full_name, private)| RepositoryPayload {
            full_name: (*full_name).to_string(),
            private: *private,
        })
        .collect()
}

/// In-memory `ActionsApi`. Unknown keys are fetch errors.
#[derive(Default)]
pub struct FakeApi {
    repositories: HashMap<String, RepositoryPayload>,
    orgs: HashMap<String, Vec<RepositoryPayload>>,
    users: HashMap<String, Vec<RepositoryPayload>>,
    workflows: HashMap<String, Vec<WorkflowPayload>>,
    runs: HashMap<String, Vec<RunPayload>>,
    billable: HashMap<String, BillablePayload>,
    billable_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    /// Register a repository reachable by `owner/name`
    #[must_use]
    pub fn with_repository(mut self, full_name: &str, private: bool) -> Self {
        let payload = repository_payloads(&[(full_name, private)]).remove(0);
        self.repositories.insert(full_name.to_string(), payload);
        self
    }

    /// Register an organization listing
    #[must_use]
    pub fn with_org(mut self, org: &str, repos: &[(&str, bool)]) -> Self {
        self.orgs.insert(org.to_string(), repository_payloads(repos));
        self
    }

    /// Register a user listing
    #[must_use]
    pub fn with_user(mut self, user: &str, repos: &[(&str, bool)]) -> Self {
        self.users.insert(user.to_string(), repository_payloads(repos));
        self
    }

    /// Register the workflows of a repository
    #[must_use]
    pub fn with_workflows(mut self, full_name: &str, workflows: Vec<WorkflowPayload>) -> Self {
        self.workflows.insert(full_name.to_string(), workflows);
        self
    }

    /// Register the runs of a workflow
    #[must_use]
    pub fn with_runs(mut self, workflow_url: &str, runs: Vec<RunPayload>) -> Self {
        self.runs.insert(workflow_url.to_string(), runs);
        self
    }

    /// Register the billed timing of a run
    #[must_use]
    pub fn with_billable(mut self, run_url: &str, macos: u64, windows: u64, ubuntu: u64) -> Self {
        self.billable.insert(
            run_url.to_string(),
            BillablePayload {
                macos: PlatformTiming { total_ms: macos },
                windows: PlatformTiming { total_ms: windows },
                ubuntu: PlatformTiming { total_ms: ubuntu },
            },
        );
        self
    }

    /// Run URLs whose timing was requested, in call order
    pub fn billable_calls(&self) -> Vec<String> {
        self.billable_calls.lock().unwrap().clone()
    }
}

impl ActionsApi for FakeApi {
    async fn repository(&self, owner: &str, name: &str) -> Result<RepositoryPayload> {
        let full_name = format!("{owner}/{name}");
        match self.repositories.get(&full_name) {
            Some(repo) => Ok(repo.clone()),
            None => bail!("no repository '{full_name}'"),
        }
    }

    async fn org_repositories(&self, org: &str) -> Result<Vec<RepositoryPayload>> {
        match self.orgs.get(org) {
            Some(repos) => Ok(repos.clone()),
            None => bail!("no organization '{org}'"),
        }
    }

    async fn user_repositories(&self, user: &str) -> Result<Vec<RepositoryPayload>> {
        match self.users.get(user) {
            Some(repos) => Ok(repos.clone()),
            None => bail!("no user '{user}'"),
        }
    }

    async fn workflows(&self, full_name: &str) -> Result<Vec<WorkflowPayload>> {
        match self.workflows.get(full_name) {
            Some(workflows) => Ok(workflows.clone()),
            None => bail!("no workflows for '{full_name}'"),
        }
    }

    async fn runs(&self, workflow_url: &str) -> Result<Vec<RunPayload>> {
        match self.runs.get(workflow_url) {
            Some(runs) => Ok(runs.clone()),
            None => bail!("no runs for '{workflow_url}'"),
        }
    }

    async fn billable(&self, run_url: &str) -> Result<BillablePayload> {
        self.billable_calls
            .lock()
            .unwrap()
            .push(run_url.to_string());
        match self.billable.get(run_url) {
            Some(billable) => Ok(*billable),
            None => bail!("no timing for '{run_url}'"),
        }
    }
}
