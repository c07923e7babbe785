//! Tracing subscriber setup for the CLI

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug output from
/// this crate with `verbose`. Logs go to stderr so they never mix with puzzle output.
pub fn init(verbose: bool) {
    let default = if verbose {
        "waffle_daily=debug"
    } else {
        "waffle_daily=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
