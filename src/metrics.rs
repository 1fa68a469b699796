/*!
 * Schedule Metrics
 * Aggregate statistics derived from a per-process schedule
 */

use crate::core::errors::{SimError, SimResult};
use crate::scheduler::ScheduleEntry;
use serde::{Deserialize, Serialize};

/// Aggregate metrics for one scheduling run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    pub avg_turnaround_time: f64,
    pub avg_waiting_time: f64,
    /// Processes completed per time unit, up to the last completion
    pub throughput: f64,
}

/// Compute means and throughput over `entries`
///
/// An empty slice is rejected instead of producing NaN or infinity.
pub fn aggregate(entries: &[ScheduleEntry]) -> SimResult<Metrics> {
    if entries.is_empty() {
        return Err(SimError::invalid("cannot aggregate an empty schedule"));
    }

    let count = entries.len() as f64;
    let (turnaround, waiting, makespan) = entries
        .iter()
        .try_fold((0u64, 0u64, 0u64), |(tat, wt, end), e| {
            Some((
                tat.checked_add(e.turnaround_time)?,
                wt.checked_add(e.waiting_time)?,
                end.max(e.completion_time),
            ))
        })
        .ok_or_else(|| SimError::invalid("schedule exceeds representable time"))?;

    if makespan == 0 {
        return Err(SimError::invalid(
            "cannot compute throughput: no process completes after time 0",
        ));
    }

    Ok(Metrics {
        avg_turnaround_time: turnaround as f64 / count,
        avg_waiting_time: waiting as f64 / count,
        throughput: count / makespan as f64,
    })
}
