use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // Determine log level from verbose flag or RUST_LOG env var
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(default_level)));

    // Build the subscriber with stderr output, keeping stdout for query results
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact(); // Use compact format

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    // Add file logging if path provided
    if let Some(log_path) = log_file {
        // Create log directory if it doesn't exist
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        // Set up file appender with daily rotation
        let file_appender = tracing_appender::rolling::daily(
            log_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("bookshelf.log")),
        );

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false) // No colors in file
            .json(); // Use JSON format for structured logs

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

/// Filter directive scoping the level to this crate's events
fn default_directive(level: &str) -> String {
    format!("bookshelf={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    /// Check which events pass a filter built from `default_directive(level)`
    fn enabled_under(level: &str) -> (bool, bool, bool) {
        let subscriber =
            tracing_subscriber::registry().with(EnvFilter::new(default_directive(level)));
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(target: "bookshelf::store", Level::DEBUG),
                tracing::enabled!(target: "bookshelf::graphql", Level::INFO),
                tracing::enabled!(target: "hyper::proto", Level::INFO),
            )
        })
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("info"), "bookshelf=info");
        assert_eq!(default_directive("debug"), "bookshelf=debug");
    }

    #[test]
    fn test_verbose_directive_enables_debug_events() {
        let (debug, info, other_crate) = enabled_under("debug");
        assert!(debug);
        assert!(info);
        assert!(!other_crate, "dependencies stay silent");
    }

    #[test]
    fn test_default_directive_hides_debug_events() {
        let (debug, info, other_crate) = enabled_under("info");
        assert!(!debug);
        assert!(info);
        assert!(!other_crate);
    }
}
