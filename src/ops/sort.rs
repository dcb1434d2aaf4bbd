use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::AppReport;
use crate::remote::CatalogSource;
use crate::resolve::NameResolver;
use crate::screenshots::{ScreenshotFormat, list_screenshots};

/// Moves `<appid>_<rest>.png` files of one folder into per-app subfolders, in place.
///
/// Moves are not transactional: an I/O error aborts with earlier files already moved.
/// A file whose destination name is taken is left in place.
#[derive(Clone, Debug)]
pub struct Sort {
    folder: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingMove {
    pub(crate) source: PathBuf,
    /// File name inside the app folder (`<rest>`, appid prefix dropped).
    pub(crate) target_name: String,
}

impl Sort {
    pub fn new(folder: &Path) -> Result<Self> {
        if !folder.is_dir() {
            anyhow::bail!(
                "Could not find the specified screenshots folder: {}",
                folder.display()
            );
        }
        Ok(Self {
            folder: folder.to_path_buf(),
        })
    }

    pub fn run<C: CatalogSource>(&self, resolver: &mut NameResolver<C>) -> Result<Vec<AppReport>> {
        let groups = group_by_appid(&self.folder)?;

        let mut reports = Vec::new();
        for (appid, moves) in groups {
            let (app_name, folder) = super::app_folder(resolver, &self.folder, &appid)?;
            let dest = self.folder.join(&folder);

            let mut count = 0;
            for m in moves {
                let target = dest.join(&m.target_name);
                if target.exists() {
                    tracing::warn!(
                        "Skipping {}: {} already exists",
                        m.source.display(),
                        target.display()
                    );
                    continue;
                }
                fs::rename(&m.source, &target).with_context(|| {
                    format!("rename {} -> {}", m.source.display(), target.display())
                })?;
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

/// Groups the uncompressed screenshots of `folder` by the appid before the first `_`.
pub(crate) fn group_by_appid(folder: &Path) -> Result<BTreeMap<String, Vec<PendingMove>>> {
    let mut groups: BTreeMap<String, Vec<PendingMove>> = BTreeMap::new();
    for path in list_screenshots(folder, ScreenshotFormat::Uncompressed)? {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(file = %path.display(), "skipping file with a non UTF-8 name");
            continue;
        };
        let Some((appid, target_name)) =
            split_appid(file_name).map(|(appid, rest)| (appid.to_string(), rest.to_string()))
        else {
            tracing::warn!(
                "Skipping {}: expected a file named <appid>_<name>.png",
                file_name
            );
            continue;
        };
        groups.entry(appid).or_default().push(PendingMove {
            source: path,
            target_name,
        });
    }
    Ok(groups)
}

fn split_appid(file_name: &str) -> Option<(&str, &str)> {
    let (appid, rest) = file_name.split_once('_')?;
    if appid.is_empty() || rest.is_empty() {
        return None;
    }
    Some((appid, rest))
}

#[cfg(test)]
#[path = "../tests/ops/sort_tests.rs"]
mod tests;
