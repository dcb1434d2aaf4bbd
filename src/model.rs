use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Default location of the appid -> name cache, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "appid_names.json";

/// Default output folder for `backup` when `-o` is not given.
pub const DEFAULT_OUTPUT_FOLDER: &str = "backup";

pub const STEAM_APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v0002";

/// Appid (decimal string) -> display name.
pub type NameCache = BTreeMap<String, String>;

#[derive(Clone, Debug)]
pub struct Settings {
    pub cache_file: PathBuf,
    pub catalog_url: String,
}

/// Outcome of processing one application folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppReport {
    /// Absent for merge, which works from folder names only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appid: Option<String>,
    pub app_name: String,
    /// Name of the folder the screenshots went into (sanitized name or appid).
    pub folder: String,
    pub count: usize,
}
