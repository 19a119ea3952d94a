use crate::SERVER_HEADING;
use askama_axum::Template;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use std::{
    fs,
    future::{self, Future},
    io,
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tower_http::services::ServeDir;

pub const HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// One line of a directory listing
pub struct ListingEntry {
    /// Percent-encoded link target, relative to the listed directory
    pub href: String,
    /// Name shown to the user, with a trailing slash for directories
    pub name: String,
}

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    path: String,
    entries: Vec<ListingEntry>,
}

/// Files under `root` are served as-is. Directories serve their index.html if they have one,
/// and a listing otherwise.
pub fn router(root: PathBuf) -> Router {
    let listing: MethodRouter = get(list_directory).with_state(Arc::new(root.clone()));
    let serve_dir = ServeDir::new(root).fallback(listing);

    Router::new().fallback_service(serve_dir)
}

/// Resolves once `signal` fires. If the signal can't be listened for, the error is logged
/// and this never resolves, so the server runs until the process is killed.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => eprintln!("{}Shutting down", SERVER_HEADING),
        Err(e) => {
            eprintln!("{}Could not listen for Ctrl+C: {:?}", SERVER_HEADING, e);
            future::pending::<()>().await;
        }
    }
}

/// Renders the listing of the directory named by the request path, or a 404
pub async fn list_directory(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let url_path = match urlencoding::decode(uri.path()) {
        Ok(path) => path.into_owned(),
        Err(_) => return not_found(),
    };

    let dir = match resolve(&root, &url_path) {
        Some(dir) if dir.is_dir() => dir,
        _ => return not_found(),
    };

    match read_entries(&dir) {
        Ok(entries) => ListingTemplate {
            path: url_path,
            entries,
        }
        .into_response(),
        Err(e) => {
            eprintln!("{}Listing {} failed: {:?}", SERVER_HEADING, dir.display(), e);
            not_found()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

/// Maps a decoded url path onto the filesystem. Anything trying to climb out of root is refused.
fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();

    for component in Path::new(url_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => (),
            _ => return None,
        }
    }

    Some(resolved)
}

/// Sorted entries of a directory, directories marked with a trailing slash
fn read_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }

    names.sort_by_key(|name| name.to_lowercase());

    Ok(names
        .into_iter()
        .map(|name| ListingEntry {
            href: urlencoding::encode(&name).replace("%2F", "/"),
            name,
        })
        .collect())
}
