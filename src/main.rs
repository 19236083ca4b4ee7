//! CLI entry point: simulated logout-page host.
//!
//! Builds an in-memory page document with a logout container and N iframes,
//! fires the frame load events after staggered delays, and runs the redirect
//! flow against in-memory browser backends.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use logout_redirect::browser::memory::{
    ActionLog, MemoryCookieJar, MemorySessionStore, RecordingNavigator,
};
use logout_redirect::{Document, Element, Frame, LogoutRedirector, RedirectorConfig};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Logout redirect starting");

    let config = match &args.config {
        Some(path) => RedirectorConfig::from_json_file(path)?,
        None => RedirectorConfig::default(),
    };

    // Build the simulated logout page: a container carrying the redirect
    // destination, with one iframe element per requested frame.
    let mut container = Element::new("div")
        .with_id(&config.container_id)
        .with_attribute(&config.redirect_url_attribute, &args.redirect_url);
    let mut loaders = Vec::new();
    for _ in 0..args.frames {
        let (frame, loader) = Frame::new();
        container = container.with_child(Element::iframe(frame));
        loaders.push(loader);
    }
    let document = Document::new(Element::new("body").with_child(container));

    // Fire the load events after staggered delays, like real embedded
    // logout frames finishing at different times.
    for (index, loader) in loaders.into_iter().enumerate() {
        let delay = args.load_delay_ms.saturating_mul(index as u64 + 1);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            loader.mark_loaded();
            debug!(frame = index, "frame load event fired");
        });
    }

    // In-memory browser state, seeded with an active session.
    let log = ActionLog::default();
    let cookies = Arc::new(MemoryCookieJar::new(log.clone()));
    cookies.set(&config.cookie_name, &config.cookie_path, "demo-token");
    let sessions = Arc::new(MemorySessionStore::new(log.clone()));
    sessions.set(&config.session_key, "demo-session");
    let navigator = Arc::new(RecordingNavigator::new(log.clone()));

    let redirector = LogoutRedirector::new(config, cookies, sessions, Arc::clone(&navigator) as Arc<dyn logout_redirect::Navigator>);
    let outcome = redirector.run(&document).await?;

    info!(
        url = %outcome.redirect_url,
        frames = outcome.frames_awaited,
        navigations = navigator.navigation_count(),
        "Logout redirect complete"
    );

    Ok(())
}
