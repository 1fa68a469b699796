/*!
 * Non-Preemptive Selection
 * Shared engine for SJF and Priority scheduling
 *
 * At each decision point the arrived, not-yet-run process with the smallest
 * key runs to completion. Ties fall back to arrival time, then id.
 */

use super::entry::{Entry, Timeline};
use crate::core::types::{Pid, Priority, Time};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Selection key for shortest-job-first
pub(super) fn burst_key(entry: &Entry) -> i128 {
    i128::from(entry.burst)
}

/// Selection key for priority scheduling (presence is validated upstream)
pub(super) fn priority_key(entry: &Entry) -> i128 {
    i128::from(entry.priority.unwrap_or(Priority::MAX))
}

pub(super) fn run<K>(order: &[Entry], key: K, timeline: &mut Timeline)
where
    K: Fn(&Entry) -> i128,
{
    // BinaryHeap is a max-heap; Reverse turns it into a min-heap on the key
    let mut ready: BinaryHeap<Reverse<(i128, Time, Pid, usize)>> =
        BinaryHeap::with_capacity(order.len());
    let mut clock: Time = 0;
    let mut next = 0;

    while next < order.len() || !ready.is_empty() {
        while next < order.len() && order[next].arrival <= clock {
            let entry = &order[next];
            let (arrival, pid) = entry.tie_break();
            ready.push(Reverse((key(entry), arrival, pid, next)));
            next += 1;
        }

        let Some(Reverse((_, _, _, idx))) = ready.pop() else {
            // CPU idle until the next arrival
            clock = order[next].arrival;
            continue;
        };

        let entry = &order[idx];
        let start = clock;
        clock += entry.burst;
        timeline.run(entry.pid, start, clock);
        timeline.complete(entry.pid, clock);
    }
}
