use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Call once, at startup.
///
/// `RUST_LOG` wins over `default_filter`. Output goes to stderr so that
/// stdout stays free for the state dump.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
