/*!
 * Engine Worker Pool
 * Request/response messages over a channel to a fixed set of worker threads
 *
 * Each worker answers requests independently through `handle`; no engine
 * state outlives a single request.
 */

use super::types::{Request, Response};
use crate::core::config::SimConfig;
use crate::core::errors::{SimError, SimResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, info};

type Envelope = (Request, flume::Sender<Response>);

/// Request counters shared by all workers
#[derive(Debug, Default)]
struct PoolCounters {
    handled: AtomicU64,
    rejected: AtomicU64,
}

/// Snapshot of pool activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub workers: usize,
    pub handled: u64,
    pub rejected: u64,
}

/// Fixed-size pool of engine workers
pub struct EnginePool {
    sender: Mutex<Option<flume::Sender<Envelope>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    worker_count: usize,
    counters: Arc<PoolCounters>,
}

impl EnginePool {
    /// Spawn `workers` threads
    pub fn new(workers: usize) -> SimResult<Self> {
        if workers == 0 {
            return Err(SimError::invalid("engine pool needs at least one worker"));
        }

        let (sender, receiver) = flume::unbounded::<Envelope>();
        let counters = Arc::new(PoolCounters::default());
        let mut handles = Vec::with_capacity(workers);

        for index in 0..workers {
            let receiver = receiver.clone();
            let counters = Arc::clone(&counters);
            let handle = std::thread::Builder::new()
                .name(format!("engine-worker-{}", index))
                .spawn(move || worker_loop(index, receiver, counters))
                .map_err(|e| {
                    SimError::WorkerUnavailable(format!("failed to spawn worker {}: {}", index, e))
                })?;
            handles.push(handle);
        }

        info!(workers, "engine pool started");

        Ok(Self {
            sender: Mutex::new(Some(sender)),
            workers: Mutex::new(handles),
            worker_count: workers,
            counters,
        })
    }

    /// Pool sized from configuration
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        Self::new(config.worker_threads)
    }

    /// Send one request and block for its response
    pub fn submit(&self, request: Request) -> SimResult<Response> {
        let pending = self.enqueue(request)?;
        Self::await_reply(pending)
    }

    /// Send every request before waiting; responses keep request order
    pub fn submit_batch(&self, requests: Vec<Request>) -> SimResult<Vec<Response>> {
        let pending = requests
            .into_iter()
            .map(|request| self.enqueue(request))
            .collect::<SimResult<Vec<_>>>()?;
        pending.into_iter().map(Self::await_reply).collect()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            workers: self.worker_count,
            handled: self.counters.handled.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
        }
    }

    /// Close the request channel and wait for workers to drain it
    pub fn shutdown(&self) {
        let Some(sender) = self.sender.lock().take() else {
            return;
        };
        drop(sender);

        let handles: Vec<_> = self.workers.lock().drain(..).collect();
        for handle in handles {
            if handle.join().is_err() {
                tracing::error!("engine worker panicked");
            }
        }
        info!(handled = self.stats().handled, "engine pool stopped");
    }

    fn enqueue(&self, request: Request) -> SimResult<flume::Receiver<Response>> {
        let sender = self
            .sender
            .lock()
            .clone()
            .ok_or_else(|| SimError::WorkerUnavailable("engine pool is shut down".into()))?;

        let (reply_tx, reply_rx) = flume::bounded(1);
        sender
            .send((request, reply_tx))
            .map_err(|_| SimError::WorkerUnavailable("request channel closed".into()))?;
        Ok(reply_rx)
    }

    fn await_reply(reply: flume::Receiver<Response>) -> SimResult<Response> {
        reply
            .recv()
            .map_err(|_| SimError::WorkerUnavailable("worker dropped the request".into()))
    }
}

impl Drop for EnginePool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(index: usize, receiver: flume::Receiver<Envelope>, counters: Arc<PoolCounters>) {
    debug!(worker = index, "engine worker ready");

    while let Ok((request, reply)) = receiver.recv() {
        let response = super::handle(request);
        if response.is_error() {
            counters.rejected.fetch_add(1, Ordering::Relaxed);
        }
        counters.handled.fetch_add(1, Ordering::Relaxed);

        // The submitter may have given up waiting
        let _ = reply.send(response);
    }

    debug!(worker = index, "engine worker exiting");
}
