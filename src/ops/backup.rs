use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::AppReport;
use crate::remote::CatalogSource;
use crate::resolve::NameResolver;
use crate::screenshots::{ScreenshotFormat, copy_preserving_times, list_screenshots, list_subdirs};

/// Steam keeps screenshots under app 760 ("Steam Screenshots") in the user folder.
const SCREENSHOTS_SUBDIR: [&str; 2] = ["760", "remote"];

/// Copies compressed screenshots out of a Steam user folder into per-app folders.
#[derive(Clone, Debug)]
pub struct Backup {
    screenshots_root: PathBuf,
    output: PathBuf,
}

impl Backup {
    pub fn new(steam_user_folder: &Path, output: &Path) -> Result<Self> {
        let screenshots_root = SCREENSHOTS_SUBDIR
            .iter()
            .fold(steam_user_folder.to_path_buf(), |p, seg| p.join(seg));
        if !screenshots_root.is_dir() {
            anyhow::bail!(
                "Could not find the screenshots folder at {}.\nMake sure the steam user folder is correct.",
                screenshots_root.display()
            );
        }
        fs::create_dir_all(output)
            .with_context(|| format!("create output folder {}", output.display()))?;
        Ok(Self {
            screenshots_root,
            output: output.to_path_buf(),
        })
    }

    pub fn run<C: CatalogSource>(&self, resolver: &mut NameResolver<C>) -> Result<Vec<AppReport>> {
        let mut reports = Vec::new();
        for appid in list_subdirs(&self.screenshots_root)? {
            let (app_name, folder) = super::app_folder(resolver, &self.output, &appid)?;
            let dest = self.output.join(&folder);

            let source = self.screenshots_root.join(&appid).join("screenshots");
            let mut count = 0;
            for shot in list_screenshots(&source, ScreenshotFormat::Compressed)? {
                let Some(name) = shot.file_name() else {
                    continue;
                };
                if dest.join(name).exists() {
                    tracing::trace!(file = %shot.display(), "already backed up");
                    continue;
                }
                copy_preserving_times(&shot, &dest)?;
                count += 1;
            }

            reports.push(AppReport {
                appid: Some(appid),
                app_name,
                folder,
                count,
            });
        }
        Ok(reports)
    }
}
