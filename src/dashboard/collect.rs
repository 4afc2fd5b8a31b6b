//! Repository discovery and workflow collection
//!
//! Drives the fetch capability: resolves which repositories to report on,
//! then for each enabled workflow filters its runs and aggregates billed
//! time. Everything runs sequentially so output order matches discovery
//! order; any fetch failure aborts the whole collection.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use super::billing::billable_ms;
use super::run::{filter_recent, Run};
use super::workflow::{Repository, Workflow};
use crate::github::ActionsApi;

/// Which repositories to report on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Organization or user name
    pub owner: String,
    /// Explicit repository names under `owner`; empty means discover all
    pub repositories: Vec<String>,
}

/// Resolve the repositories to report on.
///
/// Explicit names are fetched one by one. Otherwise the owner is tried as
/// an organization, then as a user; if both fail, the error carries both
/// causes.
pub async fn discover_repositories<A: ActionsApi>(
    api: &A,
    selection: &Selection,
) -> Result<Vec<Repository>> {
    let owner = &selection.owner;

    if !selection.repositories.is_empty() {
        let mut repositories = Vec::with_capacity(selection.repositories.len());
        for name in &selection.repositories {
            let payload = api
                .repository(owner, name)
                .await
                .with_context(|| format!("failed to fetch data for {owner}/{name}"))?;
            repositories.push(Repository::new(&payload.full_name, payload.private));
        }
        return Ok(repositories);
    }

    let payloads = match api.org_repositories(owner).await {
        Ok(payloads) => payloads,
        Err(org_err) => {
            debug!(owner, error = %org_err, "not an organization, trying user");
            api.user_repositories(owner).await.map_err(|user_err| {
                anyhow!(
                    "could not find a user or org called '{owner}': {org_err:#}; {user_err:#}"
                )
            })?
        }
    };

    Ok(payloads
        .iter()
        .map(|p| Repository::new(&p.full_name, p.private))
        .collect())
}

/// Collect the enabled workflows of `repository`, in API order.
///
/// Each workflow keeps only completed runs that finished within `window`
/// of `now`. Billed time is tracked per workflow for private repositories.
pub async fn collect_repository<A: ActionsApi>(
    api: &A,
    repository: &Repository,
    window: TimeDelta,
    now: DateTime<Utc>,
) -> Result<Vec<Workflow>> {
    let payloads = api
        .workflows(&repository.name)
        .await
        .with_context(|| format!("could not list workflows for {}", repository.name))?;

    let mut workflows = Vec::new();
    for payload in payloads.iter().filter(|w| !w.is_disabled()) {
        let raw = api
            .runs(&payload.url)
            .await
            .with_context(|| format!("could not list runs for workflow '{}'", payload.name))?;
        let fetched = raw.len();

        let runs = filter_recent(raw.iter().map(Run::from).collect(), window, now);
        let billable = billable_ms(api, repository.private, &runs).await?;

        debug!(
            repository = %repository.name,
            workflow = %payload.name,
            fetched,
            kept = runs.len(),
            billable_ms = billable,
            "collected workflow"
        );

        workflows.push(Workflow::new(&payload.name, runs, billable));
    }

    Ok(workflows)
}

/// Discover repositories and collect every repository's workflows.
pub async fn collect_all<A: ActionsApi>(
    api: &A,
    selection: &Selection,
    window: TimeDelta,
    now: DateTime<Utc>,
) -> Result<Vec<Repository>> {
    let mut repositories = discover_repositories(api, selection).await?;

    for repository in &mut repositories {
        repository.workflows = collect_repository(api, repository, window, now).await?;
    }

    Ok(repositories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{run_payload, workflow_payload, FakeApi};

    fn selection(owner: &str, repos: &[&str]) -> Selection {
        Selection {
            owner: owner.to_string(),
            repositories: repos.iter().map(ToString::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn test_discover_explicit_repositories_in_order() {
        let api = FakeApi::default()
            .with_repository("octo/b", true)
            .with_repository("octo/a", false);

        let repos = discover_repositories(&api, &selection("octo", &["b", "a"]))
            .await
            .unwrap();
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["octo/b", "octo/a"]);
        assert!(repos[0].private);
    }

    #[tokio::test]
    async fn test_discover_explicit_repository_failure() {
        let api = FakeApi::default();
        let err = discover_repositories(&api, &selection("octo", &["missing"]))
            .await
            .unwrap_err();
        assert!(
            err.to_string().contains("failed to fetch data for octo/missing"),
            "got: {err}"
        );
    }

    #[tokio::test]
    async fn test_discover_prefers_organization() {
        let api = FakeApi::default()
            .with_org("octo", &[("octo/one", false), ("octo/two", true)])
            .with_user("octo", &[("octo/user-repo", false)]);

        let repos = discover_repositories(&api, &selection("octo", &[]))
            .await
            .unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[1].name, "octo/two");
    }

    #[tokio::test]
    async fn test_discover_falls_back_to_user() {
        let api = FakeApi::default().with_user("mona", &[("mona/dotfiles", false)]);

        let repos = discover_repositories(&api, &selection("mona", &[]))
            .await
            .unwrap();
        assert_eq!(repos, vec![Repository::new("mona/dotfiles", false)]);
    }

    #[tokio::test]
    async fn test_discover_neither_org_nor_user() {
        let api = FakeApi::default();
        let err = discover_repositories(&api, &selection("ghost", &[]))
            .await
            .unwrap_err()
            .to_string();
        assert!(
            err.starts_with("could not find a user or org called 'ghost'"),
            "got: {err}"
        );
        assert!(err.contains("no organization 'ghost'"), "got: {err}");
        assert!(err.contains("no user 'ghost'"), "got: {err}");
    }

    #[tokio::test]
    async fn test_collect_skips_disabled_workflows() {
        let now = Utc::now();
        let api = FakeApi::default()
            .with_workflows(
                "octo/app",
                vec![
                    workflow_payload("CI", "active", "wf/ci"),
                    workflow_payload("Nightly", "disabled_inactivity", "wf/nightly"),
                    workflow_payload("Release", "active", "wf/release"),
                ],
            )
            .with_runs("wf/ci", vec![])
            .with_runs("wf/release", vec![]);

        let repo = Repository::new("octo/app", false);
        let workflows = collect_repository(&api, &repo, TimeDelta::days(30), now)
            .await
            .unwrap();
        let names: Vec<&str> = workflows.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["CI", "Release"]);
    }

    #[tokio::test]
    async fn test_collect_filters_runs_by_window() {
        let now = Utc::now();
        let api = FakeApi::default()
            .with_workflows("octo/app", vec![workflow_payload("CI", "active", "wf/ci")])
            .with_runs(
                "wf/ci",
                vec![
                    run_payload("run/1", "completed", Some("success"), now - TimeDelta::hours(2), 60),
                    run_payload("run/2", "in_progress", None, now, 0),
                    run_payload("run/3", "completed", Some("failure"), now - TimeDelta::hours(30), 60),
                ],
            );

        let repo = Repository::new("octo/app", false);
        let workflows = collect_repository(&api, &repo, TimeDelta::hours(24), now)
            .await
            .unwrap();
        assert_eq!(workflows[0].runs.len(), 1);
        assert_eq!(workflows[0].runs[0].url, "run/1");
    }

    #[tokio::test]
    async fn test_collect_public_repository_has_no_billing() {
        let now = Utc::now();
        let api = FakeApi::default()
            .with_workflows("octo/app", vec![workflow_payload("CI", "active", "wf/ci")])
            .with_runs(
                "wf/ci",
                vec![run_payload("run/1", "completed", Some("success"), now, 60)],
            )
            .with_billable("run/1", 0, 0, 60_000);

        let repo = Repository::new("octo/app", false);
        let workflows = collect_repository(&api, &repo, TimeDelta::days(1), now)
            .await
            .unwrap();
        assert_eq!(workflows[0].billable_ms, 0);
        assert!(api.billable_calls().is_empty());
    }

    #[tokio::test]
    async fn test_collect_private_billing_is_per_workflow() {
        let now = Utc::now();
        let api = FakeApi::default()
            .with_workflows(
                "octo/secret",
                vec![
                    workflow_payload("build", "active", "wf/build"),
                    workflow_payload("lint", "active", "wf/lint"),
                ],
            )
            .with_runs(
                "wf/build",
                vec![
                    run_payload("run/b1", "completed", Some("success"), now, 60),
                    run_payload("run/b2", "completed", Some("success"), now, 60),
                ],
            )
            .with_runs(
                "wf/lint",
                vec![run_payload("run/l1", "completed", Some("success"), now, 10)],
            )
            .with_billable("run/b1", 0, 0, 60_000)
            .with_billable("run/b2", 120_000, 0, 0)
            .with_billable("run/l1", 0, 0, 10_000);

        let repo = Repository::new("octo/secret", true);
        let workflows = collect_repository(&api, &repo, TimeDelta::days(1), now)
            .await
            .unwrap();
        assert_eq!(workflows[0].billable_ms, 180_000);
        assert_eq!(workflows[1].billable_ms, 10_000);
    }

    #[tokio::test]
    async fn test_collect_only_bills_filtered_runs() {
        let now = Utc::now();
        let api = FakeApi::default()
            .with_workflows("octo/secret", vec![workflow_payload("CI", "active", "wf/ci")])
            .with_runs(
                "wf/ci",
                vec![
                    run_payload("run/new", "completed", Some("success"), now, 60),
                    run_payload("run/old", "completed", Some("success"), now - TimeDelta::days(60), 60),
                ],
            )
            .with_billable("run/new", 0, 0, 1_000)
            .with_billable("run/old", 0, 0, 99_000);

        let repo = Repository::new("octo/secret", true);
        let workflows = collect_repository(&api, &repo, TimeDelta::days(30), now)
            .await
            .unwrap();
        assert_eq!(workflows[0].billable_ms, 1_000);
        assert_eq!(api.billable_calls(), vec!["run/new"]);
    }

    #[tokio::test]
    async fn test_collect_run_fetch_failure_aborts() {
        let api = FakeApi::default()
            .with_workflows("octo/app", vec![workflow_payload("CI", "active", "wf/ci")]);

        let repo = Repository::new("octo/app", false);
        let err = collect_repository(&api, &repo, TimeDelta::days(1), Utc::now())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("workflow 'CI'"), "got: {err}");
    }

    #[tokio::test]
    async fn test_collect_all_fills_every_repository() {
        let now = Utc::now();
        let api = FakeApi::default()
            .with_org("octo", &[("octo/a", false), ("octo/b", false)])
            .with_workflows("octo/a", vec![workflow_payload("CI", "active", "wf/a")])
            .with_workflows("octo/b", vec![])
            .with_runs("wf/a", vec![]);

        let repos = collect_all(&api, &selection("octo", &[]), TimeDelta::days(30), now)
            .await
            .unwrap();
        assert_eq!(repos[0].workflows.len(), 1);
        assert!(repos[1].workflows.is_empty());
    }
}
