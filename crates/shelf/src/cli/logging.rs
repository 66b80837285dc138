use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding a tracing filter directive, e.g. `shelfapp=debug`.
pub const LOG_ENV: &str = "SHELF_LOG";

/// Default directive for a `-v` count. Quiet unless something went wrong.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber writing to stderr.
///
/// `SHELF_LOG` wins over `-v` when set. Calling twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .without_time()
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
