use std::path::{Path, PathBuf};

use crate::catalog::{Action, Direction};

/// `<asset_root>/<character>/<action>.png`
pub fn sheet_path(asset_root: &Path, character: &str, action: Action) -> PathBuf {
    asset_root.join(character).join(format!("{}.png", action.name()))
}

/// `<asset_root>/<character>/animations/<action>`
pub fn action_dir(asset_root: &Path, character: &str, action: Action) -> PathBuf {
    asset_root
        .join(character)
        .join("animations")
        .join(action.name())
}

/// `<asset_root>/<character>/animations/<action>/<direction>`
pub fn frame_dir(
    asset_root: &Path,
    character: &str,
    action: Action,
    direction: Direction,
) -> PathBuf {
    action_dir(asset_root, character, action).join(direction.name())
}

/// Zero-padded frame file name, e.g. `frame_007.png`
pub fn frame_file_name(frame: u32) -> String {
    format!("frame_{:03}.png", frame)
}
