pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod sheet;
pub mod splitter;

pub use catalog::{Action, CHARACTERS, Direction, FRAME_SIZE};
pub use cli::CliArgs;
pub use config::SplitConfig;
pub use error::SplitterError;
pub use splitter::{ActionOutcome, ActionReport, RunSummary, Splitter};
