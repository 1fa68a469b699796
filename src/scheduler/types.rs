/*!
 * Scheduler Types
 * Domain types for CPU scheduling simulations
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::serde::is_none;
use crate::core::types::{Pid, Priority, Time};
use crate::impl_selector_serde;
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CPU scheduling algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingAlgorithm {
    /// First come, first served (non-preemptive)
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Shortest remaining time first (preemptive SJF)
    Srtf,
    /// Lowest priority value first (non-preemptive)
    Priority,
    /// Fixed-quantum time slicing over a FIFO ready queue
    RoundRobin,
}

impl SchedulingAlgorithm {
    /// Every selectable algorithm, in presentation order
    pub const ALL: [SchedulingAlgorithm; 5] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::Priority,
        Self::RoundRobin,
    ];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Whether the algorithm preempts a running process
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin)
    }
}

impl FromStr for SchedulingAlgorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srtf" => Ok(Self::Srtf),
            "priority" | "prio" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "round robin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimError::UnknownAlgorithm(format!(
                "'{}'. Valid: fcfs, sjf, srtf, priority, round_robin",
                s
            ))),
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl_selector_serde!(SchedulingAlgorithm);

/// Round-robin time quantum (time units, always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TimeQuantum(Time);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(units: Time) -> SimResult<Self> {
        if units == 0 {
            return Err(SimError::invalid("round-robin quantum must be > 0"));
        }
        Ok(Self(units))
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }
}

impl TryFrom<u64> for TimeQuantum {
    type Error = SimError;

    fn try_from(units: u64) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<TimeQuantum> for u64 {
    fn from(quantum: TimeQuantum) -> Self {
        quantum.0
    }
}

/// A synthetic job submitted for scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    #[serde(default, skip_serializing_if = "is_none")]
    pub priority: Option<Priority>,
}

impl Process {
    pub fn new(id: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Per-process outcome of a scheduling run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleEntry {
    pub id: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    #[serde(default, skip_serializing_if = "is_none")]
    pub priority: Option<Priority>,
    pub completion_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: Time,
}

impl ScheduleEntry {
    /// Derive turnaround and waiting time from a completion instant
    pub fn new(process: &Process, completion_time: Time) -> Self {
        debug_assert!(
            completion_time >= process.arrival_time.saturating_add(process.burst_time),
            "process {} completed before it could have run to completion",
            process.id
        );
        let turnaround_time = completion_time.saturating_sub(process.arrival_time);
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time.saturating_sub(process.burst_time),
        }
    }
}

/// A contiguous stretch of CPU time given to one process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutionSlice {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
}

impl ExecutionSlice {
    #[inline]
    pub const fn len(&self) -> Time {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Immutable result of one scheduling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleResult {
    pub algorithm: SchedulingAlgorithm,
    #[serde(default, skip_serializing_if = "is_none")]
    pub quantum: Option<TimeQuantum>,
    /// One entry per input process, ordered by id
    pub entries: Vec<ScheduleEntry>,
    /// Gantt timeline in execution order
    pub slices: Vec<ExecutionSlice>,
    pub metrics: Metrics,
}

impl ScheduleResult {
    /// Look up the entry for a process
    pub fn entry(&self, pid: Pid) -> Option<&ScheduleEntry> {
        self.entries
            .binary_search_by_key(&pid, |e| e.id)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Latest completion time across all processes
    pub fn makespan(&self) -> Time {
        self.entries
            .iter()
            .map(|e| e.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Order in which processes first received the CPU
    pub fn dispatch_order(&self) -> Vec<Pid> {
        let mut seen = Vec::with_capacity(self.entries.len());
        for slice in &self.slices {
            if !seen.contains(&slice.pid) {
                seen.push(slice.pid);
            }
        }
        seen
    }
}
