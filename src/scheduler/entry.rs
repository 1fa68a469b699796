/*!
 * Scheduler Entry Types
 * Engine-local working state for a single scheduling run
 */

use super::types::{ExecutionSlice, Process};
use crate::core::types::{Pid, Priority, Time};
use ahash::RandomState;
use std::collections::HashMap;

/// Ready-queue entry
///
/// Carries the mutable `remaining` counter so the caller's `Process`
/// values are never touched.
#[derive(Debug, Clone, Copy)]
pub(super) struct Entry {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub priority: Option<Priority>,
    pub remaining: Time,
}

impl Entry {
    fn new(process: &Process) -> Self {
        Self {
            pid: process.id,
            arrival: process.arrival_time,
            burst: process.burst_time,
            priority: process.priority,
            remaining: process.burst_time,
        }
    }

    /// Tie-break shared by every algorithm: earlier arrival, then lower id
    #[inline]
    pub fn tie_break(&self) -> (Time, Pid) {
        (self.arrival, self.pid)
    }
}

/// Entries sorted by `(arrival, id)`, independent of input order
pub(super) fn arrival_order(processes: &[Process]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = processes.iter().map(Entry::new).collect();
    entries.sort_by_key(Entry::tie_break);
    entries
}

/// Records what the simulated CPU did
#[derive(Debug, Default)]
pub(super) struct Timeline {
    slices: Vec<ExecutionSlice>,
    completions: HashMap<Pid, Time, RandomState>,
}

impl Timeline {
    pub fn with_capacity(processes: usize) -> Self {
        Self {
            slices: Vec::with_capacity(processes),
            completions: HashMap::with_capacity_and_hasher(processes, RandomState::new()),
        }
    }

    /// Record that `pid` held the CPU over `[start, end)`
    ///
    /// A run that continues the previous slice of the same process is merged into it.
    pub fn run(&mut self, pid: Pid, start: Time, end: Time) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(ExecutionSlice { pid, start, end });
    }

    pub fn complete(&mut self, pid: Pid, at: Time) {
        self.completions.insert(pid, at);
    }

    pub fn completion(&self, pid: Pid) -> Option<Time> {
        self.completions.get(&pid).copied()
    }

    pub fn into_slices(self) -> Vec<ExecutionSlice> {
        self.slices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_order_breaks_ties_by_id() {
        let order = arrival_order(&[
            Process::new(3, 2, 1),
            Process::new(2, 0, 1),
            Process::new(1, 2, 1),
        ]);
        let pids: Vec<Pid> = order.iter().map(|e| e.pid).collect();
        assert_eq!(pids, vec![2, 1, 3]);
    }

    #[test]
    fn test_timeline_merges_contiguous_runs() {
        let mut timeline = Timeline::with_capacity(2);
        timeline.run(1, 0, 2);
        timeline.run(1, 2, 4);
        timeline.run(2, 4, 5);
        timeline.run(1, 6, 7);
        timeline.run(2, 7, 7);

        let slices = timeline.into_slices();
        assert_eq!(
            slices,
            vec![
                ExecutionSlice { pid: 1, start: 0, end: 4 },
                ExecutionSlice { pid: 2, start: 4, end: 5 },
                ExecutionSlice { pid: 1, start: 6, end: 7 },
            ]
        );
    }
}
