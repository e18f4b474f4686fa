// ============================================================================
// Next-Frame Callback Queue
// ============================================================================

use std::collections::VecDeque;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

/// Work deferred to the next paint frame
pub type FrameCallback = Box<dyn FnOnce() + Send>;

/// Something that can run work on the next paint frame.
///
/// The ripple widget never calls user press callbacks synchronously; it hands
/// them to a scheduler so the ripple starts before the callback's own effects
/// become visible.
pub trait FrameScheduler: Send + Sync {
    /// Queue `callback` for the next frame
    fn request_frame_callback(&self, callback: FrameCallback);
}

#[derive(Default)]
struct QueueState {
    pending: VecDeque<FrameCallback>,
}

/// Thread-safe FIFO of frame callbacks, drained by the host once per frame.
///
/// Clones share the same queue.
#[derive(Clone, Default)]
pub struct FrameQueue {
    state: Arc<Mutex<QueueState>>,
}

/// Process-wide queue used by widgets that were not given their own
static GLOBAL_QUEUE: LazyLock<FrameQueue> = LazyLock::new(FrameQueue::new);

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared queue drained by [`run_frame`]
    pub fn global() -> Self {
        GLOBAL_QUEUE.clone()
    }

    fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run every callback queued before this call, in order.
    ///
    /// Callbacks queued while the frame runs wait for the next frame.
    /// Returns the number of callbacks run.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut self.lock().pending);
        let count = batch.len();
        for callback in batch {
            callback();
        }
        if count > 0 {
            log::trace!("Ran {} frame callbacks", count);
        }
        count
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame_callback(&self, callback: FrameCallback) {
        self.lock().pending.push_back(callback);
    }
}

impl std::fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Drain the global frame queue. Call once per paint frame.
pub fn run_frame() -> usize {
    GLOBAL_QUEUE.run_frame()
}
