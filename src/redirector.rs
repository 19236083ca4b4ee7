//! Logout redirect orchestration.
//!
//! Ties the pieces together: locate the container, snapshot its frames,
//! expire the authentication cookie, wait for every frame to load, then
//! clear the session record and navigate. The ordering guarantees live here:
//! the cookie is always expired before any redirect, and session removal
//! always immediately precedes the navigation it is paired with.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::browser::{CapabilityError, CookieStore, Navigator, SessionStore};
use crate::config::RedirectorConfig;
use crate::dom::Document;
use crate::watcher::CompletionWatcher;

/// Errors from a redirect run.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The container element was not found in the document. The page
    /// template is expected to guarantee its presence.
    #[error("container element '{id}' not found in document")]
    MissingContainer {
        /// The id that was looked up.
        id: String,
    },

    /// The container carries no redirect-destination attribute.
    #[error("container '{id}' has no '{attribute}' attribute")]
    MissingRedirectUrl {
        /// The container id.
        id: String,
        /// The attribute that was expected.
        attribute: String,
    },

    /// A capability backend failed.
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

/// What a completed redirect run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectOutcome {
    /// The URL the page was navigated to, verbatim from the container.
    pub redirect_url: String,
    /// How many frames were in the snapshot that was awaited.
    pub frames_awaited: usize,
}

/// Runs the logout redirect flow once, at page-ready.
pub struct LogoutRedirector {
    config: RedirectorConfig,
    cookies: Arc<dyn CookieStore>,
    sessions: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl LogoutRedirector {
    /// Creates a redirector with explicit configuration.
    #[must_use]
    pub fn new(
        config: RedirectorConfig,
        cookies: Arc<dyn CookieStore>,
        sessions: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            cookies,
            sessions,
            navigator,
        }
    }

    /// Creates a redirector with the default page contract.
    #[must_use]
    pub fn with_defaults(
        cookies: Arc<dyn CookieStore>,
        sessions: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::new(RedirectorConfig::default(), cookies, sessions, navigator)
    }

    /// Executes the logout flow against a page document.
    ///
    /// The host calls this once, when the document is ready. Consuming `self`
    /// enforces the exactly-once redirect per page load: there is no handle
    /// left to run again. The frame snapshot is taken here; frames added to
    /// the page afterward are not tracked.
    ///
    /// A frame that never fires its load event stalls this future
    /// indefinitely. That matches the page's native behavior; no timeout is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`RedirectError::MissingContainer`] or
    /// [`RedirectError::MissingRedirectUrl`] on a malformed page, and
    /// propagates [`CapabilityError`] from the injected backends.
    #[instrument(skip_all, fields(container = %self.config.container_id))]
    pub async fn run(self, document: &Document) -> Result<RedirectOutcome, RedirectError> {
        let Some(container) = document.element_by_id(&self.config.container_id) else {
            warn!("logout container missing; no redirect will be issued");
            return Err(RedirectError::MissingContainer {
                id: self.config.container_id,
            });
        };

        let Some(redirect_url) = container.attribute(&self.config.redirect_url_attribute) else {
            warn!(
                attribute = %self.config.redirect_url_attribute,
                "container has no redirect destination"
            );
            return Err(RedirectError::MissingRedirectUrl {
                id: self.config.container_id,
                attribute: self.config.redirect_url_attribute,
            });
        };
        let redirect_url = redirect_url.to_string();

        let frames = container.frames();
        let frames_awaited = frames.len();
        debug!(frames = frames_awaited, url = %redirect_url, "captured frame snapshot");

        // The cookie goes unconditionally, before any waiting or navigation.
        self.cookies
            .expire(&self.config.cookie_name, &self.config.cookie_path)
            .await?;
        debug!(cookie = %self.config.cookie_name, "authentication cookie expired");

        if !frames.is_empty() {
            CompletionWatcher::new(frames).wait_all().await;
            debug!(frames = frames_awaited, "all frames finished loading");
        }

        self.sessions.remove(&self.config.session_key).await?;
        self.navigator.navigate(&redirect_url).await?;
        info!(url = %redirect_url, frames = frames_awaited, "logout redirect issued");

        Ok(RedirectOutcome {
            redirect_url,
            frames_awaited,
        })
    }
}
