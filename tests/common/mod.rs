use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use ssu::model::NameCache;
use ssu::remote::CatalogSource;

#[allow(dead_code)]
pub const APP_LIST_PATH: &str = "/ISteamApps/GetAppList/v0002";

/// In-memory catalog that counts how often it is fetched.
#[allow(dead_code)]
pub struct FakeCatalog {
    names: NameCache,
    fail: bool,
    fetches: Cell<usize>,
}

#[allow(dead_code)]
impl FakeCatalog {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            names: names(entries),
            fail: false,
            fetches: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with(&[])
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl CatalogSource for FakeCatalog {
    fn fetch_catalog(&self) -> Result<NameCache> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail {
            anyhow::bail!("error getting app data from Steam API (503)");
        }
        Ok(self.names.clone())
    }
}

#[allow(dead_code)]
pub fn names(entries: &[(&str, &str)]) -> NameCache {
    entries
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

/// Builds a GetAppList response body.
#[allow(dead_code)]
pub fn app_list_body(entries: &[(u64, &str)]) -> serde_json::Value {
    let apps = entries
        .iter()
        .map(|(appid, name)| serde_json::json!({ "appid": appid, "name": name }))
        .collect::<Vec<_>>();
    serde_json::json!({ "applist": { "apps": apps } })
}

/// A local HTTP server answering the app list endpoint with a fixed response.
#[allow(dead_code)]
pub struct CatalogServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

#[allow(dead_code)]
impl CatalogServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for CatalogServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[allow(dead_code)]
pub fn serve_catalog(status: u16, body: serde_json::Value) -> Result<CatalogServer> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind catalog server")?;
    listener
        .set_nonblocking(true)
        .context("set listener nonblocking")?;
    let addr = listener.local_addr().context("catalog server addr")?;
    let status = StatusCode::from_u16(status).context("invalid status code")?;

    let hits = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let handler_hits = hits.clone();
    let handle = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build tokio runtime");
        rt.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt std listener");
            let app = Router::new().route(
                APP_LIST_PATH,
                get(move || {
                    let hits = handler_hits.clone();
                    let body = body.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        (status, Json(body))
                    }
                }),
            );
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("serve catalog");
        });
    });

    Ok(CatalogServer {
        url: format!("http://{}{}", addr, APP_LIST_PATH),
        hits,
        shutdown: Some(tx),
        handle: Some(handle),
    })
}

/// Writes a Steam user folder with `760/remote/<appid>/screenshots/<file>` entries.
#[allow(dead_code)]
pub fn steam_user_folder(root: &Path, shots: &[(&str, &str)]) -> Result<()> {
    for (appid, file) in shots {
        let dir = root.join("760/remote").join(appid).join("screenshots");
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        fs::write(dir.join(file), format!("{}/{}", appid, file))
            .with_context(|| format!("write {}", file))?;
    }
    Ok(())
}

/// Sorted file names directly inside `dir`.
#[allow(dead_code)]
pub fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            out.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    out.sort();
    Ok(out)
}
