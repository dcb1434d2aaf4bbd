use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::NameCache;

/// On-disk appid -> name cache (a single flat JSON object).
#[derive(Clone, Debug)]
pub struct NameCacheStore {
    path: PathBuf,
}

impl NameCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `None` when no cache file exists yet.
    pub fn load(&self) -> Result<Option<NameCache>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("read name cache {}", self.path.display()))?;
        let names: NameCache = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse name cache {}", self.path.display()))?;
        Ok(Some(names))
    }

    /// Replaces the whole cache file.
    pub fn save(&self, names: &NameCache) -> Result<()> {
        let bytes = serde_json::to_vec(names).context("serialize name cache")?;
        write_atomic(&self.path, &bytes)
            .with_context(|| format!("write name cache {}", self.path.display()))?;
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
