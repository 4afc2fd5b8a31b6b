//! Actions API client
//!
//! `ActionsApi` is the fetch capability the dashboard pipeline is fed with.
//! `GhClient` implements it by shelling out to `gh api`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::cli::{build_api_command, run_for_stdout, ApiOptions};
use super::payload::{BillablePayload, RepositoryPayload, RunPayload, WorkflowPayload};

/// Read access to repositories, workflows, runs and run billing
#[allow(async_fn_in_trait)]
pub trait ActionsApi {
    /// Fetch a single repository by owner and name
    async fn repository(&self, owner: &str, name: &str) -> Result<RepositoryPayload>;

    /// List the repositories of an organization
    async fn org_repositories(&self, org: &str) -> Result<Vec<RepositoryPayload>>;

    /// List the repositories of a user
    async fn user_repositories(&self, user: &str) -> Result<Vec<RepositoryPayload>>;

    /// List every workflow of a repository (`full_name` is `owner/name`)
    async fn workflows(&self, full_name: &str) -> Result<Vec<WorkflowPayload>>;

    /// List the runs of a workflow, newest first
    async fn runs(&self, workflow_url: &str) -> Result<Vec<RunPayload>>;

    /// Fetch the billable timing of a run
    async fn billable(&self, run_url: &str) -> Result<BillablePayload>;
}

/// `ActionsApi` backed by the GitHub CLI
#[derive(Debug, Clone, Default)]
pub struct GhClient {
    options: ApiOptions,
}

impl GhClient {
    /// Create a client that runs `binary` with the given `--cache` TTL
    #[must_use]
    pub fn new(binary: &str, cache: &str) -> Self {
        Self {
            options: ApiOptions {
                binary: binary.to_string(),
                cache: cache.to_string(),
            },
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, jq: Option<&str>) -> Result<T> {
        debug!(path, jq, "calling gh api");
        let cmd = build_api_command(path, jq, &self.options);
        let stdout = run_for_stdout(cmd)
            .await
            .with_context(|| format!("could not call gh for {path}"))?;
        serde_json::from_str(&stdout).with_context(|| format!("could not parse json from {path}"))
    }
}

impl ActionsApi for GhClient {
    async fn repository(&self, owner: &str, name: &str) -> Result<RepositoryPayload> {
        self.get(&format!("repos/{owner}/{name}"), None).await
    }

    async fn org_repositories(&self, org: &str) -> Result<Vec<RepositoryPayload>> {
        self.get(&format!("orgs/{org}/repos"), None).await
    }

    async fn user_repositories(&self, user: &str) -> Result<Vec<RepositoryPayload>> {
        self.get(&format!("users/{user}/repos"), None).await
    }

    async fn workflows(&self, full_name: &str) -> Result<Vec<WorkflowPayload>> {
        self.get(
            &format!("repos/{full_name}/actions/workflows"),
            Some(".workflows"),
        )
        .await
    }

    async fn runs(&self, workflow_url: &str) -> Result<Vec<RunPayload>> {
        self.get(&format!("{workflow_url}/runs"), Some(".workflow_runs"))
            .await
    }

    async fn billable(&self, run_url: &str) -> Result<BillablePayload> {
        self.get(&format!("{run_url}/timing"), Some(".billable"))
            .await
    }
}
