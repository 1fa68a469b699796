/*!
 * Service Module
 * In-process dispatch of engine requests
 */

mod job;
mod pool;
pub mod types;

pub use job::Job;
pub use pool::{EnginePool, PoolStats};
pub use types::{Request, Response};

use crate::core::errors::SimResult;
use crate::deadlock;
use crate::memory::PageReferenceTrace;
use crate::monitoring::OperationSpan;
use crate::scheduler::{self, TimeQuantum};
use tracing::debug;

/// Answer one request; failures become [`Response::Error`]
pub fn handle(request: Request) -> Response {
    let span = OperationSpan::new(request.operation());
    let _guard = span.enter();

    let result = dispatch(request);
    span.record_result(result.is_ok());

    result.unwrap_or_else(|e| {
        debug!(error = %e, "request rejected");
        Response::Error(e.into())
    })
}

fn dispatch(request: Request) -> SimResult<Response> {
    match request {
        Request::Schedule {
            processes,
            algorithm,
            quantum,
        } => {
            let quantum = quantum.map(TimeQuantum::new).transpose()?;
            scheduler::schedule(&processes, algorithm, quantum).map(Response::Schedule)
        }
        Request::Replay {
            pages,
            frame_capacity,
            policy,
        } => PageReferenceTrace::new(pages, frame_capacity)?
            .replay(policy)
            .map(Response::Replay),
        Request::CheckSafety {
            pending,
            state,
            algorithm,
        } => Ok(Response::Safety(deadlock::check_safety(
            &pending, &state, algorithm,
        ))),
    }
}
