pub mod cmd;
pub mod output;
pub mod root;

/// Log to stderr at WARN unless `RUST_LOG` says otherwise; stdout is kept
/// for command output and `--json`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the error chain and exit 1 on failure.
pub fn finish(result: anyhow::Result<()>) {
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
