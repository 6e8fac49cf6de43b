use anyhow::Result;
use clap::Parser;
use log::info;

use sprite_splitter::{CliArgs, SplitConfig, Splitter};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Logger may not be initialized yet
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;

    info!("Sprite splitter v{}", env!("CARGO_PKG_VERSION"));

    let splitter = Splitter::new(SplitConfig::default());
    info!("Asset root: {}", splitter.config().asset_root.display());

    // Missing and failed sheets are already logged; they never fail the run
    splitter.run();

    Ok(())
}
