//! Elapsed averager

use chrono::TimeDelta;

use super::health::recent_window;
use super::run::Run;

/// Average elapsed time over the recent window of `runs`, in whole seconds.
///
/// Each run contributes its elapsed time truncated to whole seconds. The sum
/// is divided by `cap`, not by the number of runs examined, so a workflow
/// with fewer than `cap` recent runs reports a proportionally lower average.
/// A `cap` of zero yields zero.
#[must_use]
pub fn average_elapsed(runs: &[Run], cap: usize) -> TimeDelta {
    let Ok(divisor) = i64::try_from(cap) else {
        return TimeDelta::zero();
    };
    if divisor == 0 {
        return TimeDelta::zero();
    }

    let total_secs: i64 = recent_window(runs, cap)
        .iter()
        .map(|r| r.elapsed.num_seconds())
        .sum();

    TimeDelta::seconds(total_secs / divisor)
}
