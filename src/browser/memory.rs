//! In-memory capability backends.
//!
//! Used by the demo binary and by tests that need to assert on the order of
//! side effects. All three backends append to a shared [`ActionLog`] so the
//! cookie-before-redirect and session-before-redirect orderings are
//! observable after the fact.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{CapabilityError, CookieStore, Navigator, SessionStore};

/// One recorded side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A cookie was expired.
    CookieExpired {
        /// Cookie name.
        name: String,
        /// Cookie path scope.
        path: String,
    },
    /// A session-storage entry was removed.
    SessionRemoved {
        /// Storage key.
        key: String,
    },
    /// The page was navigated.
    Navigated {
        /// Destination URL, verbatim.
        url: String,
    },
}

/// Ordered, shareable record of capability side effects.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    events: Arc<Mutex<Vec<Action>>>,
}

impl ActionLog {
    /// Appends an action to the log.
    pub fn record(&self, action: Action) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    /// Returns a copy of all recorded actions, in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Action> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// In-memory cookie jar keyed by `(name, path)`.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: DashMap<(String, String), String>,
    log: ActionLog,
}

impl MemoryCookieJar {
    /// Creates a jar that records into the given log.
    #[must_use]
    pub fn new(log: ActionLog) -> Self {
        Self {
            cookies: DashMap::new(),
            log,
        }
    }

    /// Stores a cookie value.
    pub fn set(&self, name: &str, path: &str, value: &str) {
        self.cookies
            .insert((name.to_string(), path.to_string()), value.to_string());
    }

    /// Returns whether a cookie is present.
    #[must_use]
    pub fn contains(&self, name: &str, path: &str) -> bool {
        self.cookies
            .contains_key(&(name.to_string(), path.to_string()))
    }
}

#[async_trait]
impl CookieStore for MemoryCookieJar {
    async fn expire(&self, name: &str, path: &str) -> Result<(), CapabilityError> {
        self.cookies.remove(&(name.to_string(), path.to_string()));
        debug!(name, path, "cookie expired");
        self.log.record(Action::CookieExpired {
            name: name.to_string(),
            path: path.to_string(),
        });
        Ok(())
    }
}

/// In-memory key-value session storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
    log: ActionLog,
}

impl MemorySessionStore {
    /// Creates a store that records into the given log.
    #[must_use]
    pub fn new(log: ActionLog) -> Self {
        Self {
            entries: DashMap::new(),
            log,
        }
    }

    /// Stores an entry.
    pub fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Returns whether an entry is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn remove(&self, key: &str) -> Result<(), CapabilityError> {
        // Removing an absent key is a no-op, never an error.
        self.entries.remove(key);
        debug!(key, "session entry removed");
        self.log.record(Action::SessionRemoved {
            key: key.to_string(),
        });
        Ok(())
    }
}

/// Navigator that records where the page was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    location: Mutex<Option<String>>,
    navigations: AtomicUsize,
    log: ActionLog,
}

impl RecordingNavigator {
    /// Creates a navigator that records into the given log.
    #[must_use]
    pub fn new(log: ActionLog) -> Self {
        Self {
            location: Mutex::new(None),
            navigations: AtomicUsize::new(0),
            log,
        }
    }

    /// The most recently navigated URL, if any.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of navigations issued.
    #[must_use]
    pub fn navigation_count(&self) -> usize {
        self.navigations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, url: &str) -> Result<(), CapabilityError> {
        *self
            .location
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(url.to_string());
        self.navigations.fetch_add(1, Ordering::SeqCst);
        debug!(url, "navigation issued");
        self.log.record(Action::Navigated {
            url: url.to_string(),
        });
        Ok(())
    }
}
