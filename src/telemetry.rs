//! Logging initialization
//!
//! Events go to stderr so stdout stays reserved for command output. The filter
//! is read from `TWIG_LOG` using the usual `EnvFilter` directives and defaults
//! to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TWIG_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second initialization (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
