/*!
 * Scheduler Module
 * CPU scheduling simulation over a snapshot of synthetic processes
 *
 * Every call allocates its own ready queues and remaining-time counters,
 * so concurrent callers never share mutable state.
 */

mod entry;
mod fcfs;
mod nonpreemptive;
mod round_robin;
mod srtf;
pub mod types;

pub use types::{
    ExecutionSlice, Process, ScheduleEntry, ScheduleResult, SchedulingAlgorithm, TimeQuantum,
};

use crate::core::errors::{SimError, SimResult};
use crate::metrics;
use ahash::RandomState;
use entry::{arrival_order, Timeline};
use std::collections::HashSet;
use tracing::debug;

/// Simulate `algorithm` over `processes`
///
/// `quantum` is required for [`SchedulingAlgorithm::RoundRobin`] and ignored
/// otherwise. Entries in the result are keyed and ordered by process id, so
/// the input order of `processes` never affects the outcome.
pub fn schedule(
    processes: &[Process],
    algorithm: SchedulingAlgorithm,
    quantum: Option<TimeQuantum>,
) -> SimResult<ScheduleResult> {
    validate(processes, algorithm, quantum)?;

    debug!(
        algorithm = %algorithm,
        preemptive = algorithm.is_preemptive(),
        processes = processes.len(),
        quantum = quantum.map(|q| q.get()),
        "scheduling"
    );

    let order = arrival_order(processes);
    let mut timeline = Timeline::with_capacity(processes.len());

    let quantum = match algorithm {
        SchedulingAlgorithm::Fcfs => {
            fcfs::run(&order, &mut timeline);
            None
        }
        SchedulingAlgorithm::Sjf => {
            nonpreemptive::run(&order, nonpreemptive::burst_key, &mut timeline);
            None
        }
        SchedulingAlgorithm::Priority => {
            nonpreemptive::run(&order, nonpreemptive::priority_key, &mut timeline);
            None
        }
        SchedulingAlgorithm::Srtf => {
            srtf::run(&order, &mut timeline);
            None
        }
        SchedulingAlgorithm::RoundRobin => {
            let quantum = quantum
                .ok_or_else(|| SimError::invalid("round robin requires a time quantum"))?;
            round_robin::run(&order, quantum, &mut timeline);
            Some(quantum)
        }
    };

    let mut entries = processes
        .iter()
        .map(|p| {
            timeline
                .completion(p.id)
                .map(|completion| ScheduleEntry::new(p, completion))
                .ok_or_else(|| SimError::invalid(format!("process {} never completed", p.id)))
        })
        .collect::<SimResult<Vec<_>>>()?;
    entries.sort_by_key(|e| e.id);

    let metrics = metrics::aggregate(&entries)?;
    debug!(
        algorithm = %algorithm,
        avg_turnaround = metrics.avg_turnaround_time,
        avg_waiting = metrics.avg_waiting_time,
        throughput = metrics.throughput,
        "schedule complete"
    );

    Ok(ScheduleResult {
        algorithm,
        quantum,
        entries,
        slices: timeline.into_slices(),
        metrics,
    })
}

/// Parse selector strings, then [`schedule`]
pub fn schedule_named(
    processes: &[Process],
    algorithm: &str,
    quantum: Option<u64>,
) -> SimResult<ScheduleResult> {
    let algorithm: SchedulingAlgorithm = algorithm.parse()?;
    let quantum = quantum.map(TimeQuantum::new).transpose()?;
    schedule(processes, algorithm, quantum)
}

/// Reject malformed input at the engine boundary
fn validate(
    processes: &[Process],
    algorithm: SchedulingAlgorithm,
    quantum: Option<TimeQuantum>,
) -> SimResult<()> {
    if processes.is_empty() {
        return Err(SimError::invalid("process set is empty"));
    }

    let mut seen: HashSet<_, RandomState> =
        HashSet::with_capacity_and_hasher(processes.len(), RandomState::new());
    for process in processes {
        if !seen.insert(process.id) {
            return Err(SimError::invalid(format!(
                "duplicate process id {}",
                process.id
            )));
        }
        if process.burst_time == 0 {
            return Err(SimError::invalid(format!(
                "process {} has a burst time of 0",
                process.id
            )));
        }
        if algorithm == SchedulingAlgorithm::Priority && process.priority.is_none() {
            return Err(SimError::invalid(format!(
                "process {} has no priority, required by priority scheduling",
                process.id
            )));
        }
    }

    if algorithm == SchedulingAlgorithm::RoundRobin && quantum.is_none() {
        return Err(SimError::invalid("round robin requires a time quantum"));
    }

    // Every clock value stays below the last arrival plus the total work
    let last_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(last_arrival, |horizon, p| horizon.checked_add(p.burst_time))
        .ok_or_else(|| SimError::invalid("schedule exceeds representable time"))?;

    Ok(())
}
