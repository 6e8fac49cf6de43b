use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use log::{debug, error, info, warn};

use super::paths::{frame_dir, frame_file_name, sheet_path};
use crate::catalog::{Action, Direction};
use crate::config::SplitConfig;
use crate::error::SplitterError;
use crate::sheet::{SheetLayout, crop_frame, has_visible_pixels};

/// What happened to one sheet that was split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub character: String,
    pub action: Action,
    /// Actual sheet dimensions
    pub sheet_width: u32,
    pub sheet_height: u32,
    /// Dimensions the frame grid calls for
    pub expected_width: u32,
    pub expected_height: u32,
    pub frames_written: u32,
    /// Frames that reached past the sheet edge and were zero-filled
    pub frames_padded: u32,
    /// Frames without a single visible pixel
    pub empty_frames: u32,
}

/// Result of processing one (character, action) pair
#[derive(Debug)]
pub enum ActionOutcome {
    /// Sheet was split into frames
    Split(ActionReport),
    /// No sheet at the expected path
    Missing(PathBuf),
    /// Loading, cropping or saving failed part way
    Failed(anyhow::Error),
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub split: u32,
    pub missing: u32,
    pub failed: u32,
    pub frames_written: u32,
}

impl RunSummary {
    fn record(&mut self, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Split(report) => {
                self.split += 1;
                self.frames_written += report.frames_written;
            }
            ActionOutcome::Missing(_) => self.missing += 1,
            ActionOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Splits every configured character/action sheet into per-direction frames
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Process every character and action in catalog order.
    ///
    /// Missing or broken sheets are logged and skipped; the run always
    /// finishes and reports its totals.
    pub fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        for character in &self.config.characters {
            info!("Processing {}...", character);

            for &action in &self.config.actions {
                let outcome = self.process_action(character, action);
                log_outcome(action, &outcome);
                summary.record(&outcome);
            }
        }

        info!(
            "✓ All sprites split successfully! ({} sheets split, {} missing, {} failed, {} frames written)",
            summary.split, summary.missing, summary.failed, summary.frames_written
        );

        summary
    }

    /// Split a single sheet. Never returns early with an error; failures are
    /// captured in the returned outcome.
    pub fn process_action(&self, character: &str, action: Action) -> ActionOutcome {
        let path = sheet_path(&self.config.asset_root, character, action);
        if !path.exists() {
            return ActionOutcome::Missing(path);
        }

        match self
            .split_sheet(character, action, &path)
            .with_context(|| format!("failed to split {character}/{action}"))
        {
            Ok(report) => ActionOutcome::Split(report),
            Err(e) => ActionOutcome::Failed(e),
        }
    }

    fn split_sheet(&self, character: &str, action: Action, path: &Path) -> Result<ActionReport> {
        let sheet = load_sheet(path)?;
        let layout = SheetLayout::for_action(action, self.config.frame_size);

        info!(
            "  {}: {}x{} (expecting {}x{})",
            action,
            sheet.width(),
            sheet.height(),
            layout.expected_width(),
            layout.expected_height()
        );
        if !layout.matches(sheet.width(), sheet.height()) {
            debug!(
                "  {}: sheet size differs from the {}x{} frame grid",
                action, layout.columns, layout.rows
            );
        }

        let mut report = ActionReport {
            character: character.to_string(),
            action,
            sheet_width: sheet.width(),
            sheet_height: sheet.height(),
            expected_width: layout.expected_width(),
            expected_height: layout.expected_height(),
            frames_written: 0,
            frames_padded: 0,
            empty_frames: 0,
        };

        for direction in Direction::ALL {
            let dir = frame_dir(&self.config.asset_root, character, action, direction);
            fs::create_dir_all(&dir)
                .map_err(|e| SplitterError::CreateDir {
                    path: dir.clone(),
                    source: e,
                })?;

            let mut empty = 0;
            for frame in 0..layout.columns {
                let rect = layout.frame_rect(direction, frame);
                let tile = crop_frame(&sheet, rect);
                let out_path = dir.join(frame_file_name(frame));

                tile.image
                    .save(&out_path)
                    .map_err(|e| SplitterError::ImageSave {
                        path: out_path.clone(),
                        source: e,
                    })?;

                debug!(
                    "    {} <- ({}, {}, {}, {}){}",
                    out_path.display(),
                    rect.left,
                    rect.top,
                    rect.right,
                    rect.bottom,
                    if tile.padded { " padded" } else { "" }
                );

                report.frames_written += 1;
                if tile.padded {
                    report.frames_padded += 1;
                }
                if !has_visible_pixels(&tile.image) {
                    empty += 1;
                }
            }

            info!("    {}/{}: {} frames", action, direction, layout.columns);
            if empty > 0 {
                debug!(
                    "    {}: {}/{} frames have no visible pixels",
                    direction, empty, layout.columns
                );
            }
            report.empty_frames += empty;
        }

        Ok(report)
    }
}

fn load_sheet(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)
        .map_err(|e| SplitterError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SplitterError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(img)
}

fn log_outcome(action: Action, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Split(report) => {
            if report.frames_padded > 0 {
                debug!(
                    "    {}: {} frames padded past the sheet edge",
                    action, report.frames_padded
                );
            }
            info!("    ✓ {} split successfully", action);
        }
        ActionOutcome::Missing(path) => warn!("  ⚠ Missing: {}", path.display()),
        ActionOutcome::Failed(e) => error!("  ✗ Error processing {}: {:#}", action, e),
    }
}
