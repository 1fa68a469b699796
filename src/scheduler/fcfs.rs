/*!
 * First Come, First Served
 */

use super::entry::{Entry, Timeline};

/// Run every process to completion in `(arrival, id)` order
pub(super) fn run(order: &[Entry], timeline: &mut Timeline) {
    let mut clock = 0;
    for entry in order {
        let start = clock.max(entry.arrival);
        clock = start + entry.burst;
        timeline.run(entry.pid, start, clock);
        timeline.complete(entry.pid, clock);
    }
}
