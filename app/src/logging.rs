use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global subscriber, writing to stderr.
///
/// `--verbose` wins, then `RUST_LOG`, then the configured level.
pub fn init(default_level: &str, verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
