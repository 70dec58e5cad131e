//! UI-thread dispatch.
//!
//! Host frameworks own a single message thread where input callbacks run and
//! where widget state may be touched. [`MessageThread`] is the two things the
//! backend needs from it: "am I on it?" and "run this on it later".
//!
//! [`QueuedMessageThread`] is a self-contained implementation for hosts that
//! drive their own loop, and for tests: jobs go into a crossbeam channel and
//! run when the owning thread calls [`pump`](QueuedMessageThread::pump).

use std::thread::{self, ThreadId};

use crossbeam_channel::{Receiver, Sender};
use tracing::error;

/// Deferred work for the message thread.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// A host's UI thread.
pub trait MessageThread: Send + Sync {
    /// Whether the caller is on the message thread.
    fn is_current_thread(&self) -> bool;

    /// Schedule `job` to run on the message thread.
    ///
    /// Jobs posted from one thread run in the order they were posted. Never
    /// blocks and never runs `job` inline.
    fn call_async(&self, job: Job);
}

/// Debug-assert that the caller is on the message thread.
///
/// Returns `false` (after logging) in release builds when the contract is
/// broken, so the caller can skip the operation.
pub(crate) fn on_message_thread(thread: &dyn MessageThread, operation: &'static str) -> bool {
    let current = thread.is_current_thread();
    debug_assert!(current, "{operation} must run on the message thread");
    if !current {
        error!(operation, "called off the message thread");
    }
    current
}

/// Channel-backed message queue bound to the thread that created it.
#[derive(Debug)]
pub struct QueuedMessageThread {
    owner: ThreadId,
    tx: Sender<Job>,
    rx: Receiver<Job>,
}

impl Default for QueuedMessageThread {
    fn default() -> Self {
        Self::new()
    }
}

impl QueuedMessageThread {
    /// Create a queue whose message thread is the calling thread.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            owner: thread::current().id(),
            tx,
            rx,
        }
    }

    /// Run every queued job in FIFO order, including jobs queued by the jobs
    /// themselves. Returns how many ran.
    ///
    /// Must be called on the owning thread.
    pub fn pump(&self) -> usize {
        if !on_message_thread(self, "QueuedMessageThread::pump") {
            return 0;
        }
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Number of jobs waiting.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// The thread jobs run on.
    pub fn owner(&self) -> ThreadId {
        self.owner
    }
}

impl MessageThread for QueuedMessageThread {
    fn is_current_thread(&self) -> bool {
        thread::current().id() == self.owner
    }

    fn call_async(&self, job: Job) {
        // The receiver lives as long as `self`, so the send cannot fail.
        let _ = self.tx.send(job);
    }
}
