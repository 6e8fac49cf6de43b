use clap::Parser;

/// All splitting parameters are fixed; the only switches control logging.
#[derive(Parser, Debug)]
#[command(name = "split-orc-sprites")]
#[command(version, about = "Split orc sprite sheets into per-direction animation frames", long_about = None)]
pub struct CliArgs {
    /// Verbose output (crop rectangles, padding and empty-frame details)
    #[arg(short, long)]
    pub verbose: bool,
}
