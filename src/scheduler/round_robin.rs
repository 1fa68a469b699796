/*!
 * Round Robin
 * Fixed-quantum time slicing over a FIFO ready queue
 */

use super::entry::{Entry, Timeline};
use super::types::TimeQuantum;
use crate::core::types::Time;
use std::collections::VecDeque;

pub(super) fn run(order: &[Entry], quantum: TimeQuantum, timeline: &mut Timeline) {
    let mut work: Vec<Entry> = order.to_vec();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(work.len());
    let mut clock: Time = 0;
    let mut next = 0;

    loop {
        admit(&work, clock, &mut next, &mut ready);

        let Some(idx) = ready.pop_front() else {
            match work.get(next) {
                Some(upcoming) => {
                    clock = upcoming.arrival;
                    continue;
                }
                None => break,
            }
        };

        let entry = &mut work[idx];
        let slice = entry.remaining.min(quantum.get());
        timeline.run(entry.pid, clock, clock + slice);
        entry.remaining -= slice;
        clock += slice;

        // Arrivals during the slice (and at its end) queue ahead of the preempted process
        let (pid, remaining) = (entry.pid, entry.remaining);
        admit(&work, clock, &mut next, &mut ready);

        if remaining == 0 {
            timeline.complete(pid, clock);
        } else {
            ready.push_back(idx);
        }
    }
}

/// Enqueue every process that has arrived by `clock`, in arrival order
fn admit(work: &[Entry], clock: Time, next: &mut usize, ready: &mut VecDeque<usize>) {
    while *next < work.len() && work[*next].arrival <= clock {
        ready.push_back(*next);
        *next += 1;
    }
}
