/*!
 * Service Message Types
 * Request/response records exchanged with the engines
 */

use crate::core::errors::SerializableError;
use crate::core::serde::is_none;
use crate::core::types::PageId;
use crate::deadlock::{DeadlockAlgorithm, DeadlockVerdict, ResourceRequest, ResourceState};
use crate::memory::{PageStats, ReplacementPolicy};
use crate::scheduler::{Process, ScheduleResult, SchedulingAlgorithm};
use serde::{Deserialize, Serialize};

/// A request for one engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum Request {
    Schedule {
        processes: Vec<Process>,
        algorithm: SchedulingAlgorithm,
        #[serde(default, skip_serializing_if = "is_none")]
        quantum: Option<u64>,
    },
    Replay {
        pages: Vec<PageId>,
        frame_capacity: usize,
        policy: ReplacementPolicy,
    },
    CheckSafety {
        pending: Vec<ResourceRequest>,
        state: ResourceState,
        algorithm: DeadlockAlgorithm,
    },
}

impl Request {
    /// Short name used in spans and logs
    pub const fn operation(&self) -> &'static str {
        match self {
            Request::Schedule { .. } => "schedule",
            Request::Replay { .. } => "replay",
            Request::CheckSafety { .. } => "check_safety",
        }
    }
}

/// An engine's answer to a [`Request`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Response {
    Schedule(ScheduleResult),
    Replay(PageStats),
    Safety(DeadlockVerdict),
    Error(SerializableError),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}
