//! Browser capability interfaces.
//!
//! The redirector never touches ambient browser state directly. The host
//! injects three capabilities — a cookie store, a key-value session store,
//! and a navigator — so the completion-counting core stays testable in
//! isolation. All three are write-only from this crate's point of view:
//! artifacts are expired or removed, never read back.

mod error;
pub mod memory;

pub use error::CapabilityError;

use async_trait::async_trait;

/// Write access to the host's cookie jar.
#[async_trait]
pub trait CookieStore: Send + Sync {
    /// Expires/deletes the cookie with the given name and path scope.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError`] when the host-side store fails.
    async fn expire(&self, name: &str, path: &str) -> Result<(), CapabilityError>;
}

/// Write access to the host's key-value session storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Removes the entry for `key`. Must be a no-op (not an error) when the
    /// key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError`] when the host-side store fails.
    async fn remove(&self, key: &str) -> Result<(), CapabilityError>;
}

/// Control over the page location.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigates the page to `url`. The URL is passed verbatim; no
    /// validation is performed on its contents.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError`] when the host cannot issue the navigation.
    async fn navigate(&self, url: &str) -> Result<(), CapabilityError>;
}
