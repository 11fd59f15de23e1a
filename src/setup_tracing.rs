use time::macros::format_description;
use tracing_subscriber::{fmt::time::OffsetTime, EnvFilter};

/// Installs the global subscriber, writing to stderr.
///
/// `default_level` applies unless `RUST_LOG` is set. Standard output is left
/// to the generated tokens.
pub fn setup_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Remove module paths for cleaner output
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_ansi(true)
        .with_timer(OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC),
            format_description!("[hour]:[minute]:[second].[subsecond digits:2]"),
        ))
        .compact()
        .init();
}
