//! Health summarizer
//!
//! Maps the most recent runs of a workflow to pass/fail/neutral symbols.

use super::run::{Conclusion, Run};

/// Outcome symbol for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthSymbol {
    /// Run succeeded
    Pass,
    /// Run failed, timed out, or needs action
    Fail,
    /// Run was skipped, cancelled, or neutral
    Neutral,
    /// Run has not completed
    NeutralUnknown,
}

impl HealthSymbol {
    /// Classify a single run
    #[must_use]
    pub fn for_run(run: &Run) -> Self {
        if !run.is_completed() {
            return Self::NeutralUnknown;
        }

        match run.conclusion {
            Some(Conclusion::Success) => Self::Pass,
            Some(Conclusion::Skipped | Conclusion::Cancelled | Conclusion::Neutral) => {
                Self::Neutral
            }
            _ => Self::Fail,
        }
    }
}

/// The runs examined by the health and elapsed summaries.
///
/// Takes the first `cap + 1` runs in input order: the examined window
/// stops only once the index exceeds `cap`. Input is assumed newest-first;
/// no sorting happens here.
#[must_use]
pub fn recent_window(runs: &[Run], cap: usize) -> &[Run] {
    &runs[..runs.len().min(cap.saturating_add(1))]
}

/// Summarize the recent window of `runs` as a health sequence.
#[must_use]
pub fn summarize_health(runs: &[Run], cap: usize) -> Vec<HealthSymbol> {
    recent_window(runs, cap)
        .iter()
        .map(HealthSymbol::for_run)
        .collect()
}
