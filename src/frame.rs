//! Iframe load-state signaling.
//!
//! A [`Frame`] is the redirector's view of one embedded iframe: a cloneable
//! handle that can be checked or awaited for load completion. The host side
//! holds the matching [`FrameLoader`] and calls [`FrameLoader::mark_loaded`]
//! when the iframe's load event fires.

use tokio::sync::watch;

/// Observer handle for one iframe's load state.
///
/// Cheap to clone; every clone observes the same underlying load event.
#[derive(Debug, Clone)]
pub struct Frame {
    loaded: watch::Receiver<bool>,
}

/// Host-side sender that signals an iframe's load event.
#[derive(Debug)]
pub struct FrameLoader {
    tx: watch::Sender<bool>,
}

impl Frame {
    /// Creates a frame/loader pair for a not-yet-loaded iframe.
    #[must_use]
    pub fn new() -> (Self, FrameLoader) {
        let (tx, rx) = watch::channel(false);
        (Self { loaded: rx }, FrameLoader { tx })
    }

    /// Creates a frame whose load event has already fired.
    #[must_use]
    pub fn preloaded() -> Self {
        let (frame, loader) = Self::new();
        loader.mark_loaded();
        frame
    }

    /// Returns whether the load event has been observed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }

    /// Resolves once the iframe has finished loading.
    ///
    /// Resolves immediately for an already-loaded frame. If the host drops
    /// the [`FrameLoader`] without ever signaling load, this future pends
    /// forever, matching the native semantics of an iframe that never fires
    /// its load event.
    pub async fn loaded(mut self) {
        if self.loaded.wait_for(|loaded| *loaded).await.is_err() {
            // Loader gone without a load event: the iframe will never
            // complete, so neither does this future.
            std::future::pending::<()>().await;
        }
    }
}

impl FrameLoader {
    /// Signals the load event. Idempotent.
    pub fn mark_loaded(&self) {
        self.tx.send_replace(true);
    }
}
