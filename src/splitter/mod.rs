mod paths;
mod runner;

pub use paths::{action_dir, frame_dir, frame_file_name, sheet_path};
pub use runner::{ActionOutcome, ActionReport, RunSummary, Splitter};
