/*!
 * Job Submission Record
 * What the job form submits, projected onto the engine inputs
 */

use crate::core::serde::is_none;
use crate::core::types::{Pid, Priority, Time};
use crate::deadlock::{ResourceRequest, ResourceVector};
use crate::scheduler::Process;
use serde::{Deserialize, Serialize};

/// A submitted job: timing for the scheduler, demand for the deadlock checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Job {
    pub id: Pid,
    pub arrival_time: Time,
    pub burst_time: Time,
    #[serde(default, skip_serializing_if = "is_none")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub demand: ResourceVector,
}

impl Job {
    pub fn new(id: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: None,
            demand: ResourceVector::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_demand(mut self, demand: ResourceVector) -> Self {
        self.demand = demand;
        self
    }

    /// Scheduler view of the job
    pub fn process(&self) -> Process {
        Process {
            id: self.id,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
        }
    }

    /// Deadlock-checker view of the job
    pub fn request(&self) -> ResourceRequest {
        ResourceRequest::new(self.id, self.demand)
    }
}
