use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};

/// Screenshot formats Steam writes, told apart by file extension only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenshotFormat {
    /// Steam's automatic JPEG store.
    Compressed,
    /// PNG copy written when "Save an uncompressed copy" is enabled.
    Uncompressed,
}

impl ScreenshotFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ScreenshotFormat::Compressed => "jpg",
            ScreenshotFormat::Uncompressed => "png",
        }
    }

    fn matcher(self) -> Result<GlobMatcher> {
        let pattern = format!("*.{}", self.extension());
        let glob = GlobBuilder::new(&pattern)
            .case_insensitive(cfg!(windows))
            .literal_separator(true)
            .build()
            .with_context(|| format!("invalid glob: {}", pattern))?;
        Ok(glob.compile_matcher())
    }
}

/// Files of `format` directly inside `dir`, sorted by name.
///
/// A missing directory has no screenshots.
pub fn list_screenshots(dir: &Path, format: ScreenshotFormat) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let matcher = format.matcher()?;

    let mut out = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read dir entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if matcher.is_match(Path::new(&entry.file_name())) {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Base names (extension stripped) of every screenshot of the given formats in `dir`.
pub fn screenshot_stems(dir: &Path, formats: &[ScreenshotFormat]) -> Result<HashSet<String>> {
    let mut stems = HashSet::new();
    for format in formats {
        for path in list_screenshots(dir, *format)? {
            if let Some(stem) = file_stem(&path) {
                stems.insert(stem);
            }
        }
    }
    Ok(stems)
}

pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

/// Names of the immediate subdirectories of `dir`, sorted.
pub fn list_subdirs(dir: &Path) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read dir entry in {}", dir.display()))?;
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => out.push(name),
            Err(name) => {
                tracing::warn!(name = ?name, dir = %dir.display(), "skipping folder with a non UTF-8 name");
            }
        }
    }
    out.sort();
    Ok(out)
}

/// Copies `src` into `dest_dir` under the same file name, keeping its
/// permissions and access/modification times.
pub fn copy_preserving_times(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .with_context(|| format!("no file name in {}", src.display()))?;
    let dest = dest_dir.join(name);

    let meta = fs::metadata(src).with_context(|| format!("stat {}", src.display()))?;
    fs::copy(src, &dest)
        .with_context(|| format!("copy {} -> {}", src.display(), dest.display()))?;

    let mut times = fs::FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    set_times_on_copy(&dest, times, meta.permissions())?;

    Ok(dest)
}

// Windows needs write access to change times, which a copied read-only
// attribute denies; the attribute is restored afterwards.
#[cfg(windows)]
fn set_times_on_copy(dest: &Path, times: fs::FileTimes, perms: fs::Permissions) -> Result<()> {
    if perms.readonly() {
        let mut writable = perms.clone();
        writable.set_readonly(false);
        fs::set_permissions(dest, writable)
            .with_context(|| format!("clear read-only on {}", dest.display()))?;
    }
    fs::OpenOptions::new()
        .write(true)
        .open(dest)
        .with_context(|| format!("open {}", dest.display()))?
        .set_times(times)
        .with_context(|| format!("set file times on {}", dest.display()))?;
    if perms.readonly() {
        fs::set_permissions(dest, perms)
            .with_context(|| format!("restore permissions on {}", dest.display()))?;
    }
    Ok(())
}

// Unix only needs ownership, so read-only permissions are fine.
#[cfg(not(windows))]
fn set_times_on_copy(dest: &Path, times: fs::FileTimes, _perms: fs::Permissions) -> Result<()> {
    fs::File::open(dest)
        .with_context(|| format!("open {}", dest.display()))?
        .set_times(times)
        .with_context(|| format!("set file times on {}", dest.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/screenshots_tests.rs"]
mod tests;
