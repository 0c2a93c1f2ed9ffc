// src/pool/engine.rs
// =============================================================================
// Runs the whole fan-out / fan-in pipeline for one input.
//
// How it works:
// 1. Start every worker, each holding a clone of the queue's receiver
// 2. Read URLs from the source and push them into the bounded queue
//    (when all workers are busy and the queue is full, we wait here)
// 3. Close the queue once the input is exhausted
// 4. Wait until every worker has exited
//
// At most `worker_count` probes run at once, and at most
// `worker_count + queue capacity` URLs have been read but not yet finished.
//
// A run moves through Init -> Running -> Draining -> Done, never skipping a
// state. There is no way to cancel a run once it has started.
// =============================================================================

use crate::aggregator::Recorder;
use crate::pool::Worker;
use crate::prober::Prober;
use crate::source::UrlSource;
use anyhow::{ensure, Result};
use futures::future::join_all;
use std::io;
use std::sync::Arc;

/// Queue slots per worker
pub const QUEUE_FACTOR: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunState {
    /// Nothing started yet
    Init,
    /// Producer feeding the queue, workers consuming
    Running,
    /// Queue closed, workers finishing what is in flight
    Draining,
    /// Every worker has exited
    Done,
}

/// What happened during a run, apart from the results themselves
#[derive(Debug, Default)]
pub struct RunStats {
    /// URLs pushed into the queue
    pub dispatched: usize,
    /// URLs the workers actually probed
    pub probed: usize,
    /// Workers that died instead of exiting normally
    pub failed_workers: usize,
    /// The read error that cut the input short, if any
    pub input_error: Option<io::Error>,
}

pub struct Engine {
    worker_count: usize,
    state: RunState,
}

impl Engine {
    pub fn new(worker_count: usize) -> Self {
        Engine {
            worker_count: worker_count.max(1),
            state: RunState::Init,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn queue_capacity(&self) -> usize {
        self.worker_count * QUEUE_FACTOR
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(next > self.state, "{:?} -> {:?}", self.state, next);
        log::debug!("run state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Probes every URL from `source` and records each result through
    /// `recorder`. Returns once all workers have exited.
    pub async fn run<P: Prober>(
        &mut self,
        mut source: UrlSource,
        prober: Arc<P>,
        recorder: Recorder,
    ) -> Result<RunStats> {
        ensure!(
            self.state == RunState::Init,
            "An engine can only run once (currently {:?})",
            self.state
        );

        let (queue, requests) = async_channel::bounded(self.queue_capacity());

        // Workers exist before the first URL is read
        let workers: Vec<_> = (0..self.worker_count)
            .map(|id| {
                let worker = Worker::new(id, requests.clone(), recorder.clone(), prober.clone());
                tokio::spawn(worker.listen())
            })
            .collect();
        // Only the workers may keep the receiving side and the recorders alive
        drop(requests);
        drop(recorder);

        log::info!(
            "Started {} worker(s), queue capacity {}",
            self.worker_count(),
            self.queue_capacity()
        );
        self.advance(RunState::Running);

        let mut stats = RunStats::default();
        while let Some(url) = source.next_url().await {
            if queue.send(url).await.is_err() {
                // Only happens when every worker has died
                log::error!("No worker left to probe the remaining URLs");
                break;
            }
            stats.dispatched += 1;
        }

        queue.close();
        self.advance(RunState::Draining);

        // Join barrier: nothing is flushed before every worker is gone
        for joined in join_all(workers).await {
            match joined {
                Ok(probed) => stats.probed += probed,
                Err(e) => {
                    log::error!("A worker stopped abnormally: {}", e);
                    stats.failed_workers += 1;
                }
            }
        }

        self.advance(RunState::Done);
        stats.input_error = source.take_error();

        log::info!(
            "Dispatched {} URL(s), probed {}",
            stats.dispatched,
            stats.probed
        );
        Ok(stats)
    }
}
