/*!
 * Deadlock Types
 * Resource snapshots, pending requests and verdicts
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::types::Pid;
use crate::impl_selector_serde;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource classes tracked by the simulator, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceClass {
    Cpu,
    Disk,
    Memory,
}

impl ResourceClass {
    pub const ALL: [ResourceClass; 3] = [Self::Cpu, Self::Disk, Self::Memory];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Disk => "disk",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One amount per resource class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ResourceVector {
    pub cpu: u64,
    pub disk: u64,
    pub memory: u64,
}

impl ResourceVector {
    pub const fn new(cpu: u64, disk: u64, memory: u64) -> Self {
        Self { cpu, disk, memory }
    }

    #[inline]
    pub const fn get(&self, class: ResourceClass) -> u64 {
        match class {
            ResourceClass::Cpu => self.cpu,
            ResourceClass::Disk => self.disk,
            ResourceClass::Memory => self.memory,
        }
    }

    /// `(class, amount)` pairs in check order
    pub fn iter(&self) -> impl Iterator<Item = (ResourceClass, u64)> + '_ {
        ResourceClass::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Component-wise sum that saturates instead of overflowing
    pub fn saturating_add(self, other: Self) -> Self {
        Self {
            cpu: self.cpu.saturating_add(other.cpu),
            disk: self.disk.saturating_add(other.disk),
            memory: self.memory.saturating_add(other.memory),
        }
    }

    /// First class where `self` exceeds `limit`, if any
    pub fn first_excess(&self, limit: &ResourceVector) -> Option<ResourceClass> {
        self.iter()
            .find(|&(class, amount)| amount > limit.get(class))
            .map(|(class, _)| class)
    }
}

/// Capacity and current availability of one resource class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResourcePool {
    /// Total capacity, fixed at configuration time
    pub instances: u64,
    pub available: u64,
}

impl ResourcePool {
    pub fn new(instances: u64, available: u64) -> SimResult<Self> {
        if available > instances {
            return Err(SimError::invalid(format!(
                "available ({}) exceeds instances ({})",
                available, instances
            )));
        }
        Ok(Self {
            instances,
            available,
        })
    }
}

// Snapshots arriving over the wire go through the same check as `new`
impl<'de> Deserialize<'de> for ResourcePool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Record {
            instances: u64,
            available: u64,
        }

        let record = Record::deserialize(deserializer)?;
        ResourcePool::new(record.instances, record.available).map_err(de::Error::custom)
    }
}

/// Read-only snapshot of every resource pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResourceState {
    pub cpu: ResourcePool,
    pub disk: ResourcePool,
    pub memory: ResourcePool,
}

impl ResourceState {
    pub fn new(instances: ResourceVector, available: ResourceVector) -> SimResult<Self> {
        Ok(Self {
            cpu: ResourcePool::new(instances.cpu, available.cpu)?,
            disk: ResourcePool::new(instances.disk, available.disk)?,
            memory: ResourcePool::new(instances.memory, available.memory)?,
        })
    }

    /// Snapshot with every instance available
    pub fn idle(instances: ResourceVector) -> Self {
        Self {
            cpu: ResourcePool { instances: instances.cpu, available: instances.cpu },
            disk: ResourcePool { instances: instances.disk, available: instances.disk },
            memory: ResourcePool { instances: instances.memory, available: instances.memory },
        }
    }

    pub const fn pool(&self, class: ResourceClass) -> &ResourcePool {
        match class {
            ResourceClass::Cpu => &self.cpu,
            ResourceClass::Disk => &self.disk,
            ResourceClass::Memory => &self.memory,
        }
    }

    pub fn available(&self) -> ResourceVector {
        ResourceVector::new(self.cpu.available, self.disk.available, self.memory.available)
    }
}

/// Resources a job is asking for (or holding, for the graph check)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResourceRequest {
    pub job_id: Pid,
    pub demand: ResourceVector,
}

impl ResourceRequest {
    pub const fn new(job_id: Pid, demand: ResourceVector) -> Self {
        Self { job_id, demand }
    }
}

/// Deadlock safety algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlockAlgorithm {
    /// Single-instant feasibility of every pending request
    Bankers,
    /// Aggregate-sum approximation of a resource-allocation-graph cycle
    ResourceGraph,
}

impl DeadlockAlgorithm {
    pub const ALL: [DeadlockAlgorithm; 2] = [Self::Bankers, Self::ResourceGraph];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bankers => "bankers",
            Self::ResourceGraph => "resource_graph",
        }
    }
}

impl FromStr for DeadlockAlgorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bankers" | "banker" | "banker's" | "banker's algorithm" => Ok(Self::Bankers),
            "resource_graph" | "rag" | "resource allocation graph" => Ok(Self::ResourceGraph),
            _ => Err(SimError::UnknownAlgorithm(format!(
                "'{}'. Valid: bankers, resource_graph",
                s
            ))),
        }
    }
}

impl fmt::Display for DeadlockAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl_selector_serde!(DeadlockAlgorithm);

/// Outcome of a safety check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeadlockVerdict {
    pub safe: bool,
    pub reason: String,
}

impl DeadlockVerdict {
    pub fn safe(reason: impl Into<String>) -> Self {
        Self {
            safe: true,
            reason: reason.into(),
        }
    }

    pub fn unsafe_state(reason: impl Into<String>) -> Self {
        Self {
            safe: false,
            reason: reason.into(),
        }
    }
}
