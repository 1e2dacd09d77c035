use bmcanvas::cli::{self, Cli};
use bmcanvas::init_logging;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let cli = Cli::parse();
    tracing::debug!(version = bmcanvas::VERSION, built = bmcanvas::BUILD_DATE, "Starting");

    cli::run(cli)
}
