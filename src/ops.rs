//! The three screenshot operations. Each validates its folders in `new`
//! before any work happens, then does the work in `run`.

use std::path::Path;

use anyhow::Result;

use crate::paths::{ensure_app_folder, sanitize_app_name};
use crate::remote::CatalogSource;
use crate::resolve::NameResolver;

mod backup;
mod merge;
mod sort;

pub use self::backup::Backup;
pub use self::merge::Merge;
pub use self::sort::Sort;

/// Resolves `appid` and materializes its folder under `root`.
///
/// Returns `(app_name, folder_name_used)`.
fn app_folder<C: CatalogSource>(
    resolver: &mut NameResolver<C>,
    root: &Path,
    appid: &str,
) -> Result<(String, String)> {
    let app_name = resolver.resolve(appid)?;
    let folder = ensure_app_folder(root, &sanitize_app_name(&app_name), appid)?;
    Ok((app_name, folder))
}
