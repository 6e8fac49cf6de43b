mod types;

pub use types::{SplitConfig, default_asset_root};
