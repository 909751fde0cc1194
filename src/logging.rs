use std::io::IsTerminal;

use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tracing::trace;

/// Logs go to stderr so stdout only ever carries answers.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "advent=debug" } else { "advent=warn" };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .init();

    trace!("finished");
}
