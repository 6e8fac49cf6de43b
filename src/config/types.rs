use std::path::{Path, PathBuf};

use crate::catalog::{Action, CHARACTERS, FRAME_SIZE};

/// Asset root next to the crate manifest: `<crate>/public/assets`
pub fn default_asset_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("public")
        .join("assets")
}

/// Everything the splitter needs to know about one run.
///
/// All values are compile-time constants in normal use; the struct exists so
/// the asset root can be pointed somewhere else in tests.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Directory holding one subdirectory per character
    pub asset_root: PathBuf,
    /// Character directory names, in processing order
    pub characters: Vec<String>,
    /// Actions to split for every character, in processing order
    pub actions: Vec<Action>,
    /// Frame tile edge length in pixels
    pub frame_size: u32,
}

impl SplitConfig {
    /// Default catalogs rooted at `asset_root`
    pub fn with_asset_root(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            ..Self::default()
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            characters: CHARACTERS.iter().map(|c| (*c).to_string()).collect(),
            actions: Action::ALL.to_vec(),
            frame_size: FRAME_SIZE,
        }
    }
}
