//! Billable aggregator
//!
//! Sums billed runner time for the filtered runs of one workflow. Only
//! private repositories are billed; public ones always report zero.

use anyhow::{Context, Result};

use super::run::Run;
use crate::github::ActionsApi;

/// Total billed milliseconds for `runs`, fetching each run's timing.
///
/// The total starts at zero on every call, so it never carries over from a
/// previously aggregated workflow. Returns zero without any fetch when the
/// repository is public.
pub async fn billable_ms<A: ActionsApi>(api: &A, private: bool, runs: &[Run]) -> Result<u64> {
    if !private {
        return Ok(0);
    }

    let mut total_ms = 0;
    for run in runs {
        let billable = api
            .billable(&run.url)
            .await
            .with_context(|| format!("could not fetch timing for {}", run.url))?;
        total_ms += billable.total_ms();
    }

    Ok(total_ms)
}
