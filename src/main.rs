mod config;
mod convert;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "sessions-to-ics")]
#[command(version)]
#[command(about = "Write calendar files for the conference sessions you follow, grouped by session type")]
struct Cli {
    /// The session catalog
    sessions: PathBuf,

    /// The interests file
    interests: PathBuf,

    /// The output directory
    #[arg(short, long, default_value = "sessions")]
    output_dir: PathBuf,

    /// Log what is being loaded and written
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::from(cli);
    convert::run(config)?;

    Ok(())
}
