// src/pool/worker.rs
// One worker: pull a URL, probe it, record the result, repeat until the queue
// is closed and empty.

use crate::aggregator::Recorder;
use crate::prober::Prober;
use async_channel::Receiver;
use std::sync::Arc;

pub struct Worker<P> {
    id: usize,
    requests: Receiver<String>,
    recorder: Recorder,
    prober: Arc<P>,
}

impl<P: Prober> Worker<P> {
    pub fn new(id: usize, requests: Receiver<String>, recorder: Recorder, prober: Arc<P>) -> Self {
        Worker {
            id,
            requests,
            recorder,
            prober,
        }
    }

    /// Runs until the producer has closed the queue and it is empty.
    /// Returns how many URLs this worker probed.
    pub async fn listen(self) -> usize {
        let mut probed = 0;

        // recv() only fails once the channel is closed *and* drained
        while let Ok(url) = self.requests.recv().await {
            log::trace!("worker {} probing {}", self.id, url);
            let result = self.prober.probe(&url).await;
            self.recorder.record(result);
            probed += 1;
        }

        log::trace!("worker {} exiting after {} probe(s)", self.id, probed);
        probed
    }
}
