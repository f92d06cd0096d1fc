//! Compute offload worker pool.
//!
//! A producer submits [`ComputeRequest`]s into one bounded job queue. Stateless
//! worker tasks drain it, run each job on the blocking pool and push the
//! [`ComputeResponse`] onto a reply channel in completion order. Replies are
//! correlated by `request_id` only; nothing is ever cancelled.

use crate::config::WorkerConfig;
use crate::error::{EngineError, Result};
use crate::services::compute::compute_indicators;
use crate::types::{ComputeRequest, ComputeResponse};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

type JobQueue = Arc<Mutex<mpsc::Receiver<ComputeRequest>>>;

type ComputeFn = fn(&ComputeRequest) -> ComputeResponse;

/// Handle to a running worker pool.
pub struct ComputeWorker {
    jobs: mpsc::Sender<ComputeRequest>,
    handles: Vec<JoinHandle<()>>,
}

impl ComputeWorker {
    /// Start the pool. Returns the submit handle and the reply stream.
    pub fn spawn(config: &WorkerConfig) -> (Self, mpsc::UnboundedReceiver<ComputeResponse>) {
        Self::spawn_with(config, compute_indicators)
    }

    fn spawn_with(
        config: &WorkerConfig,
        compute: ComputeFn,
    ) -> (Self, mpsc::UnboundedReceiver<ComputeResponse>) {
        let (jobs_tx, jobs_rx) = mpsc::channel(config.queue_capacity.max(1));
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        let queue: JobQueue = Arc::new(Mutex::new(jobs_rx));

        let workers = config.workers.max(1);
        let handles = (0..workers)
            .map(|worker_id| {
                tokio::spawn(run_worker(
                    worker_id,
                    queue.clone(),
                    reply_tx.clone(),
                    compute,
                ))
            })
            .collect();

        info!(
            "Started {} compute workers (queue capacity {})",
            workers, config.queue_capacity
        );

        (
            Self {
                jobs: jobs_tx,
                handles,
            },
            reply_rx,
        )
    }

    /// Queue a request. Waits only while the queue is full.
    pub async fn submit(&self, request: ComputeRequest) -> Result<()> {
        debug!(
            "Submitting request {} ({} candles, {} indicators)",
            request.request_id,
            request.candles.len(),
            request.indicators.len()
        );
        self.jobs
            .send(request)
            .await
            .map_err(|_| EngineError::QueueClosed)
    }

    /// Stop accepting work and wait for queued and running jobs to finish.
    pub async fn shutdown(self) {
        drop(self.jobs);
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Compute worker panicked: {}", e);
            }
        }
        info!("Compute workers stopped");
    }
}

async fn run_worker(
    worker_id: usize,
    queue: JobQueue,
    replies: mpsc::UnboundedSender<ComputeResponse>,
    compute: ComputeFn,
) {
    loop {
        // Release the lock before computing so other workers can pick up jobs.
        let next = queue.lock().await.recv().await;
        let request = match next {
            Some(request) => request,
            None => break,
        };

        let request_id = request.request_id;
        let response = match tokio::task::spawn_blocking(move || compute(&request)).await {
            Ok(response) => response,
            Err(e) => {
                // Every request still gets exactly one reply.
                error!(
                    "Worker {} failed request {}: {}",
                    worker_id,
                    request_id,
                    EngineError::from(e)
                );
                ComputeResponse::empty(request_id)
            }
        };

        if replies.send(response).is_err() {
            debug!("Reply channel closed, worker {} exiting", worker_id);
            break;
        }
    }

    debug!("Compute worker {} stopped", worker_id);
}

/// Issues request ids and tells stale replies apart from the latest one.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id. It becomes the latest.
    pub fn next_id(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Whether a reply for `request_id` is still wanted.
    pub fn is_latest(&self, request_id: u64) -> bool {
        request_id == self.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_util::*;
    use crate::types::IndicatorDescriptor;

    fn config(workers: usize) -> WorkerConfig {
        WorkerConfig {
            workers,
            queue_capacity: 4,
        }
    }

    #[tokio::test]
    async fn test_every_request_gets_one_reply() {
        let (worker, mut replies) = ComputeWorker::spawn(&config(2));

        for request_id in 1..=5 {
            worker
                .submit(ComputeRequest {
                    request_id,
                    candles: choppy_candles(40),
                    indicators: vec![IndicatorDescriptor::pane("rsi")],
                })
                .await
                .unwrap();
        }

        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(replies.recv().await.unwrap().request_id);
        }
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        worker.shutdown().await;
        assert!(replies.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_reply_stream_closes_queue() {
        let (worker, replies) = ComputeWorker::spawn(&config(1));
        drop(replies);

        let empty = |request_id| ComputeRequest {
            request_id,
            candles: Vec::new(),
            indicators: Vec::new(),
        };

        // The only worker exits on its first failed reply, dropping the queue.
        let mut closed = false;
        for request_id in 1..=100 {
            match worker.submit(empty(request_id)).await {
                Ok(()) => tokio::time::sleep(std::time::Duration::from_millis(5)).await,
                Err(EngineError::QueueClosed) => {
                    closed = true;
                    break;
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        assert!(closed);
        worker.shutdown().await;
    }

    #[tokio::test]
    async fn test_failed_compute_still_replies() {
        fn explode(request: &ComputeRequest) -> ComputeResponse {
            if request.request_id == 2 {
                panic!("compute failed");
            }
            compute_indicators(request)
        }

        let (worker, mut replies) = ComputeWorker::spawn_with(&config(1), explode);
        for request_id in 1..=3 {
            worker
                .submit(ComputeRequest {
                    request_id,
                    candles: choppy_candles(40),
                    indicators: vec![IndicatorDescriptor::pane("rsi")],
                })
                .await
                .unwrap();
        }
        worker.shutdown().await;

        let mut responses = Vec::new();
        while let Some(response) = replies.recv().await {
            responses.push(response);
        }
        responses.sort_by_key(|r| r.request_id);

        let ids: Vec<u64> = responses.iter().map(|r| r.request_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(responses[1].panes.is_empty());
        assert!(responses[1].overlays.is_empty());
        assert!(responses[0].panes.contains_key("rsi"));
    }

    #[test]
    fn test_request_tracker() {
        let tracker = RequestTracker::new();
        assert_eq!(tracker.latest(), 0);
        let first = tracker.next_id();
        let second = tracker.next_id();
        assert_eq!((first, second), (1, 2));
        assert!(!tracker.is_latest(first));
        assert!(tracker.is_latest(second));
    }
}
