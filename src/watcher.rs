//! Completion watcher for a snapshot of embedded frames.
//!
//! Implements the explicit-counter scheme: the counter starts at the snapshot
//! length, decrements once per observed load completion, and the watcher
//! resolves exactly when it reaches zero. Frames that are already loaded at
//! registration time count synchronously; the rest complete in whatever order
//! their load events arrive.

use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use crate::frame::Frame;

/// Tracks load completion across a fixed snapshot of frames.
pub struct CompletionWatcher {
    frames: Vec<Frame>,
}

impl CompletionWatcher {
    /// Registers a snapshot of frames. The set is fixed; frames added to the
    /// page afterward are not tracked.
    #[must_use]
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Number of frames in the snapshot.
    #[must_use]
    pub fn total(&self) -> usize {
        self.frames.len()
    }

    /// Number of snapshot frames that have not yet loaded, at this instant.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.iter().filter(|frame| !frame.is_loaded()).count()
    }

    /// Resolves once every frame in the snapshot has loaded.
    ///
    /// Each frame is counted exactly once, in any arrival order. An empty
    /// snapshot resolves immediately. A frame that never loads stalls this
    /// future indefinitely; no timeout is applied.
    pub async fn wait_all(self) {
        let total = self.frames.len();
        let mut remaining = total;
        let mut pending = FuturesUnordered::new();

        for frame in self.frames {
            if frame.is_loaded() {
                remaining -= 1;
                debug!(remaining, total, "frame already loaded at registration");
            } else {
                pending.push(frame.loaded());
            }
        }

        while remaining > 0 && pending.next().await.is_some() {
            remaining -= 1;
            debug!(remaining, total, "frame finished loading");
        }
    }
}
