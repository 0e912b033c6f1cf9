//! UI event loop
//!
//! Single-threaded task queue standing in for the host's UI thread. Handles can be
//! cloned and sent anywhere; the loop itself is drained on the thread that owns it.

use crate::host::{UiTask, UiTaskQueue};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Counts from one drain of the loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub ran: usize,
    pub failed: usize,
}

/// Sending side of the UI queue
#[derive(Clone, Debug)]
pub struct UiQueueHandle {
    tx: UnboundedSender<UiTask>,
}

impl UiTaskQueue for UiQueueHandle {
    fn schedule(&self, task: UiTask) {
        if self.tx.send(task).is_err() {
            tracing::warn!("UI event loop is gone, dropping scheduled task");
        }
    }
}

/// Receiving side of the UI queue
pub struct UiEventLoop {
    rx: UnboundedReceiver<UiTask>,
}

impl UiEventLoop {
    /// Create a loop and the handle used to post work to it.
    pub fn channel() -> (UiQueueHandle, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (UiQueueHandle { tx }, Self { rx })
    }

    /// Run every task currently queued, including tasks they post, then return.
    pub fn run_pending(&mut self) -> LoopStats {
        let mut stats = LoopStats::default();
        while let Ok(task) = self.rx.try_recv() {
            Self::execute(task, &mut stats);
        }
        stats
    }

    /// Block running tasks until every handle has been dropped.
    ///
    /// Must not be called from within an async runtime.
    pub fn run(&mut self) -> LoopStats {
        let mut stats = LoopStats::default();
        while let Some(task) = self.rx.blocking_recv() {
            Self::execute(task, &mut stats);
        }
        tracing::debug!("UI event loop finished: {} ran, {} failed", stats.ran, stats.failed);
        stats
    }

    fn execute(task: UiTask, stats: &mut LoopStats) {
        stats.ran += 1;
        if let Err(e) = task() {
            stats.failed += 1;
            tracing::error!("UI task failed: {}", e);
        }
    }
}
