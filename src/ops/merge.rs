use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::AppReport;
use crate::screenshots::{
    ScreenshotFormat, copy_preserving_times, file_stem, list_screenshots, list_subdirs,
    screenshot_stems,
};

/// Fills a sorted uncompressed tree with the compressed screenshots it lacks.
///
/// App folders are matched by name; screenshots by base name, ignoring extension.
#[derive(Clone, Debug)]
pub struct Merge {
    compressed: PathBuf,
    uncompressed: PathBuf,
}

impl Merge {
    pub fn new(compressed: &Path, uncompressed: &Path) -> Result<Self> {
        if !compressed.is_dir() {
            anyhow::bail!(
                "Could not find the compressed screenshots folder: {}",
                compressed.display()
            );
        }
        if !uncompressed.is_dir() {
            anyhow::bail!(
                "Could not find the uncompressed screenshots folder: {}",
                uncompressed.display()
            );
        }
        Ok(Self {
            compressed: compressed.to_path_buf(),
            uncompressed: uncompressed.to_path_buf(),
        })
    }

    pub fn run(&self) -> Result<Vec<AppReport>> {
        let mut reports = Vec::new();
        for app_name in list_subdirs(&self.compressed)? {
            let source = self.compressed.join(&app_name);
            let dest = self.uncompressed.join(&app_name);
            fs::create_dir_all(&dest)
                .with_context(|| format!("create app folder {}", dest.display()))?;

            // Includes previously merged jpgs, so re-running adds nothing.
            let mut present = screenshot_stems(
                &dest,
                &[ScreenshotFormat::Uncompressed, ScreenshotFormat::Compressed],
            )?;

            let mut count = 0;
            for shot in list_screenshots(&source, ScreenshotFormat::Compressed)? {
                let Some(stem) = file_stem(&shot) else {
                    continue;
                };
                if present.contains(&stem) {
                    continue;
                }
                copy_preserving_times(&shot, &dest)?;
                present.insert(stem);
                count += 1;
            }

            reports.push(AppReport {
                appid: None,
                folder: app_name.clone(),
                app_name,
                count,
            });
        }
        Ok(reports)
    }
}
