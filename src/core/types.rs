/*!
 * Core Types
 * Common types used across the simulation engines
 */

/// Process ID type (caller-assigned, unique per submission)
pub type Pid = u32;

/// Logical time in integer units since the start of a simulation
pub type Time = u64;

/// Page identifier in a reference string
pub type PageId = i64;

/// Priority level (numerically smaller is scheduled first)
pub type Priority = i32;
