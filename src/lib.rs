//! Logout Redirect Library
//!
//! Implements the logout-page redirect flow for an embedded/webview host:
//! at page-ready, snapshot the iframes under the logout container, expire the
//! client-side authentication cookie, wait for every frame to finish loading,
//! then remove the local session record and navigate to the URL the
//! container carries.
//!
//! # Architecture
//!
//! - [`dom`] - minimal page document model (the host's DOM contract)
//! - [`frame`] - iframe load-state signaling
//! - [`watcher`] - completion counting over a frame snapshot
//! - [`browser`] - injected capability interfaces (cookies, session storage,
//!   navigation) plus in-memory backends
//! - [`config`] - page-contract names and keys
//! - [`redirector`] - the orchestration tying it all together

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod config;
pub mod dom;
pub mod frame;
pub mod redirector;
pub mod watcher;

// Re-export commonly used types
pub use browser::{CapabilityError, CookieStore, Navigator, SessionStore};
pub use config::{ConfigError, RedirectorConfig};
pub use dom::{Document, Element};
pub use frame::{Frame, FrameLoader};
pub use redirector::{LogoutRedirector, RedirectError, RedirectOutcome};
pub use watcher::CompletionWatcher;
