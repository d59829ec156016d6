use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use layar::config::Config;

#[derive(Debug, Parser)]
#[command(name = "layar", version, about = "Terminal browser for a remote movie catalog")]
struct Args {
    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    layar::logging::init_tracing();

    let config = match args.config {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    layar::ui::run(config)
}
