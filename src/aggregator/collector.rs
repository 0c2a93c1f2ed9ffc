// src/aggregator/collector.rs
// =============================================================================
// The collector task and the handles used to feed it.
//
// Lifecycle:
// 1. `Aggregator::new` spawns the collector (unless we are in quiet mode)
// 2. every worker gets a `Recorder` and calls `record` once per probe
// 3. after all workers have exited, `flush` closes the channel, waits for the
//    collector and renders what it gathered
//
// The collector only stops once every sender is gone. That includes the
// recorders handed to workers, so `flush` must only be called after the pool
// has drained.
// =============================================================================

use crate::formatters::{ResultFormatter, Summary};
use crate::prober::ProbeResult;
use anyhow::{Context, Result};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Owns the collector task for one run
pub struct Aggregator {
    sender: Option<UnboundedSender<ProbeResult>>,
    collector: Option<JoinHandle<Vec<ProbeResult>>>,
}

/// A cheap, cloneable handle that workers record results through
#[derive(Clone)]
pub struct Recorder {
    sender: Option<UnboundedSender<ProbeResult>>,
}

/// What a run produced once it has been flushed
#[derive(Debug, Default)]
pub struct Report {
    /// Rendered results, one per line, each line ending in a newline
    pub output: String,
    pub summary: Summary,
}

impl Aggregator {
    /// Starts the collector. In quiet mode nothing is started and every
    /// recorded result is dropped on the spot.
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Aggregator {
                sender: None,
                collector: None,
            };
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        let collector = tokio::spawn(collect(receiver));

        Aggregator {
            sender: Some(sender),
            collector: Some(collector),
        }
    }

    pub fn recorder(&self) -> Recorder {
        Recorder {
            sender: self.sender.clone(),
        }
    }

    /// Waits for the collector and hands back everything it gathered,
    /// in completion order
    pub async fn finish(mut self) -> Result<Vec<ProbeResult>> {
        // Our own sender has to go too, or the collector never sees the end
        drop(self.sender.take());

        match self.collector.take() {
            Some(collector) => collector
                .await
                .context("Result collector stopped unexpectedly"),
            None => Ok(Vec::new()),
        }
    }

    /// Finishes the run and renders every result with `formatter`
    pub async fn flush(self, formatter: &dyn ResultFormatter) -> Result<Report> {
        let results = self.finish().await?;

        let mut output = String::new();
        for result in &results {
            output.push_str(&formatter.format_result(result)?);
            output.push('\n');
        }

        Ok(Report {
            output,
            summary: results.iter().collect(),
        })
    }
}

impl Recorder {
    /// Records one result. Safe to call from any number of tasks at once.
    pub fn record(&self, result: ProbeResult) {
        let Some(sender) = &self.sender else {
            log::trace!("Quiet mode, not recording {}", result.url);
            return;
        };

        if let Err(e) = sender.send(result) {
            log::warn!("Result for {} was lost: collector is gone", e.0.url);
        }
    }
}

async fn collect(mut receiver: UnboundedReceiver<ProbeResult>) -> Vec<ProbeResult> {
    let mut results = Vec::new();
    while let Some(result) = receiver.recv().await {
        results.push(result);
    }
    log::debug!("Collector done, {} result(s) gathered", results.len());
    results
}
