use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// Which set of filesystem-illegal characters to strip from app names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFlavor {
    Windows,
    Unix,
}

impl PathFlavor {
    pub fn host() -> Self {
        if cfg!(windows) {
            PathFlavor::Windows
        } else {
            PathFlavor::Unix
        }
    }

    fn illegal_chars(self) -> &'static [char] {
        match self {
            PathFlavor::Windows => &['<', '>', ':', '"', '/', '\\', '|', '?', '*'],
            PathFlavor::Unix => &['/'],
        }
    }
}

/// Strips characters the host filesystem rejects in a directory name.
///
/// The result may be empty, or collide with another app's sanitized name.
pub fn sanitize_app_name(name: &str) -> String {
    sanitize_app_name_for(name, PathFlavor::host())
}

pub fn sanitize_app_name_for(name: &str, flavor: PathFlavor) -> String {
    let illegal = flavor.illegal_chars();
    name.chars().filter(|c| !illegal.contains(c)).collect()
}

/// Creates `root/<sanitized_name>`, or `root/<appid>` if that fails.
///
/// Returns the folder name actually used. Both creations are idempotent.
pub fn ensure_app_folder(root: &Path, sanitized_name: &str, appid: &str) -> Result<String> {
    match create_child_dir(root, sanitized_name) {
        Ok(()) => Ok(sanitized_name.to_string()),
        Err(err) => {
            tracing::warn!(
                "Could not create a folder with the app name \"{}\" ({}). Using appid ({}).",
                sanitized_name,
                err,
                appid
            );
            create_child_dir(root, appid).with_context(|| {
                format!("create app folder {}", root.join(appid).display())
            })?;
            Ok(appid.to_string())
        }
    }
}

fn create_child_dir(root: &Path, name: &str) -> io::Result<()> {
    // These resolve to `root` itself or its parent.
    if name.is_empty() || name == "." || name == ".." {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a usable folder name",
        ));
    }
    fs::create_dir_all(root.join(name))
}

#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod tests;
