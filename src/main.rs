//! goc CLI entry point

fn main() {
    // Logs go to stderr so the C text on stdout stays clean; RUST_LOG overrides the default.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    goc::cli::run();
}
