use anyhow::{Context, Result};

use crate::model::NameCache;
use crate::remote::CatalogSource;
use crate::store::NameCacheStore;

/// Resolves appids to display names from the local cache, refreshing it from
/// the remote catalog at most once per resolver.
pub struct NameResolver<C> {
    store: NameCacheStore,
    source: C,
    names: NameCache,
    has_attempted_remote_fetch: bool,
}

impl<C: CatalogSource> NameResolver<C> {
    /// Loads the cache file, or downloads and persists the catalog if there is none.
    pub fn open(store: NameCacheStore, source: C) -> Result<Self> {
        let mut resolver = Self {
            store,
            source,
            names: NameCache::new(),
            has_attempted_remote_fetch: false,
        };

        match resolver.store.load()? {
            Some(names) => {
                tracing::info!("Loading appid names from local cache...");
                tracing::debug!(path = %resolver.store.path().display(), apps = names.len(), "cache loaded");
                resolver.names = names;
            }
            None => {
                tracing::info!("Downloading app data from Steam API...");
                resolver.refresh()?;
            }
        }

        Ok(resolver)
    }

    /// Returns the display name for `appid`, or `appid` itself when the catalog
    /// does not know it.
    ///
    /// Errors only when a remote refresh was needed and failed.
    pub fn resolve(&mut self, appid: &str) -> Result<String> {
        if let Some(name) = self.lookup(appid) {
            return Ok(name);
        }

        if !self.has_attempted_remote_fetch {
            tracing::info!(
                "Appid {} not found in local cache, downloading app data from Steam API...",
                appid
            );
            self.refresh()?;
            if let Some(name) = self.lookup(appid) {
                return Ok(name);
            }
        }

        tracing::info!(
            "Appid {} not found in the Steam database, skipping name conversion.",
            appid
        );
        Ok(appid.to_string())
    }

    pub fn has_attempted_remote_fetch(&self) -> bool {
        self.has_attempted_remote_fetch
    }

    fn lookup(&self, appid: &str) -> Option<String> {
        self.names
            .get(appid)
            .filter(|name| !name.is_empty())
            .cloned()
    }

    fn refresh(&mut self) -> Result<()> {
        // Set before fetching so a failed fetch is never retried in this run.
        self.has_attempted_remote_fetch = true;
        let names = self
            .source
            .fetch_catalog()
            .context("download app data")?;
        self.store.save(&names)?;
        self.names = names;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
