//! DTOs for the Steam `GetAppList` response.

use crate::model::NameCache;

#[derive(Debug, serde::Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

#[derive(Debug, serde::Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

#[derive(Debug, serde::Deserialize)]
pub struct AppEntry {
    pub appid: u64,
    #[serde(default)]
    pub name: String,
}

impl AppListResponse {
    /// Flattens the list into a name map. Later entries win on duplicate appids.
    pub fn into_names(self) -> NameCache {
        self.applist
            .apps
            .into_iter()
            .map(|app| (app.appid.to_string(), app.name))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
