/*!
 * Shortest Remaining Time First
 * Event-driven preemptive SJF
 *
 * The running process is re-evaluated only at arrival and completion events;
 * between two events no selection can change.
 */

use super::entry::{Entry, Timeline};
use crate::core::types::{Pid, Time};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub(super) fn run(order: &[Entry], timeline: &mut Timeline) {
    let mut work: Vec<Entry> = order.to_vec();
    let mut ready: BinaryHeap<Reverse<(Time, Time, Pid, usize)>> =
        BinaryHeap::with_capacity(work.len());
    let mut clock: Time = 0;
    let mut next = 0;

    loop {
        while next < work.len() && work[next].arrival <= clock {
            let entry = &work[next];
            ready.push(Reverse((entry.remaining, entry.arrival, entry.pid, next)));
            next += 1;
        }

        let Some(Reverse((_, _, _, idx))) = ready.pop() else {
            match work.get(next) {
                Some(upcoming) => {
                    clock = upcoming.arrival;
                    continue;
                }
                None => break,
            }
        };

        // Run until completion or the next arrival, whichever comes first
        let next_arrival = work.get(next).map_or(Time::MAX, |e| e.arrival);
        let entry = &mut work[idx];
        let until = (clock + entry.remaining).min(next_arrival);
        timeline.run(entry.pid, clock, until);
        entry.remaining -= until - clock;
        clock = until;

        if entry.remaining == 0 {
            timeline.complete(entry.pid, clock);
        } else {
            // An equal remaining time never preempts: the incumbent arrived earlier
            ready.push(Reverse((entry.remaining, entry.arrival, entry.pid, idx)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::entry::arrival_order;
    use super::*;
    use crate::scheduler::{ExecutionSlice, Process};

    #[test]
    fn test_preempts_on_strictly_shorter_arrival() {
        let order = arrival_order(&[
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ]);
        let mut timeline = Timeline::with_capacity(4);
        run(&order, &mut timeline);

        assert_eq!(timeline.completion(2), Some(5));
        assert_eq!(timeline.completion(4), Some(10));
        assert_eq!(timeline.completion(1), Some(17));
        assert_eq!(timeline.completion(3), Some(26));
        assert_eq!(
            timeline.into_slices()[..2],
            [
                ExecutionSlice { pid: 1, start: 0, end: 1 },
                ExecutionSlice { pid: 2, start: 1, end: 5 },
            ]
        );
    }

    #[test]
    fn test_equal_remaining_does_not_preempt() {
        let order = arrival_order(&[Process::new(1, 0, 4), Process::new(2, 1, 3)]);
        let mut timeline = Timeline::with_capacity(2);
        run(&order, &mut timeline);

        // At t=1 process 1 has 3 units left, same as the newcomer
        assert_eq!(timeline.completion(1), Some(4));
        assert_eq!(timeline.completion(2), Some(7));
    }
}
