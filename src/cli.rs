//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Simulate a logout page: wait for embedded frames, clear session state,
/// redirect.
///
/// Builds an in-memory logout page with the requested number of iframes,
/// fires their load events after staggered delays, and runs the redirect
/// flow against in-memory browser backends.
#[derive(Parser, Debug)]
#[command(name = "logout-redirect")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Post-logout destination placed on the container element
    #[arg(short = 'u', long, default_value = "/")]
    pub redirect_url: String,

    /// Number of iframes embedded in the simulated page (0-100)
    #[arg(short = 'f', long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub frames: u8,

    /// Delay before each frame's load event fires, in milliseconds
    #[arg(short = 'd', long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(0..=60000))]
    pub load_delay_ms: u64,

    /// Optional JSON config overriding the page-contract names and keys
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["logout-redirect"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.redirect_url, "/");
        assert_eq!(args.frames, 2);
        assert_eq!(args.load_delay_ms, 250);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["logout-redirect", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_frames_range_is_enforced() {
        let args = Args::try_parse_from(["logout-redirect", "--frames", "0"]).unwrap();
        assert_eq!(args.frames, 0);

        let result = Args::try_parse_from(["logout-redirect", "--frames", "101"]);
        assert!(result.is_err(), "frames above 100 should be rejected");
    }

    #[test]
    fn test_cli_redirect_url_passthrough() {
        let args =
            Args::try_parse_from(["logout-redirect", "-u", "https://example.com/login"]).unwrap();
        assert_eq!(args.redirect_url, "https://example.com/login");
    }
}
