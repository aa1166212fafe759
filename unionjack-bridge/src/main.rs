use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use unionjack_bridge::{config, shell};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Optional first argument: path to a config file.
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load(explicit.as_deref())?;

    shell::run(config)
}
