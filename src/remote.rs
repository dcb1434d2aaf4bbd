use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::NameCache;

mod types;
pub use self::types::*;

/// Source of the full appid -> name catalog.
pub trait CatalogSource {
    fn fetch_catalog(&self) -> Result<NameCache>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn fetch_catalog(&self) -> Result<NameCache> {
        (**self).fetch_catalog()
    }
}

/// Blocking client for the Steam app list endpoint.
pub struct CatalogClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        // The full app list is several megabytes.
        let client = reqwest::blocking::Client::builder()
            .user_agent("ssu")
            .timeout(Duration::from_secs(120))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_catalog(&self) -> Result<NameCache> {
        let started = std::time::Instant::now();
        let resp = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("request app list from {}", self.url))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!(
                "error getting app data from Steam API ({} returned {})",
                self.url,
                status
            );
        }

        let body: AppListResponse = resp.json().context("parse app list response")?;
        let names = body.into_names();
        tracing::debug!(
            apps = names.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched app list"
        );
        Ok(names)
    }
}
