//! Static asset serving module
//!
//! Maps unrouted request paths to files under the public root directory,
//! with content type inference and a traversal guard.

use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{self, mime};
use crate::logger;

/// Index files tried for directory requests, in order
const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Try to serve `path` from the public root.
///
/// Returns `None` when no matching file exists so the caller can fall
/// through to 404.
pub async fn try_serve(path: &str, public_dir: &str) -> Option<Response<Full<Bytes>>> {
    let (content, content_type) = load_from_public(public_dir, path).await?;
    Some(http::build_file_response(content, content_type))
}

/// Resolve a request path to a file under the public root and read it.
pub async fn load_from_public(public_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and neutralize parent-directory components
    let clean_path = path.trim_start_matches('/').replace("..", "");

    let public_canonical = match Path::new(public_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Public directory not found or inaccessible '{public_dir}': {e}"
            ));
            return None;
        }
    };

    let mut file_path = Path::new(public_dir).join(&clean_path);

    // Directory requests resolve through the index files
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        file_path = resolve_index(&file_path)?;
    }

    // Missing files are a routine 404, not worth a warning
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&public_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// First existing index file under `dir`, if any
fn resolve_index(dir: &Path) -> Option<PathBuf> {
    INDEX_FILES
        .iter()
        .map(|index| dir.join(index))
        .find(|candidate| candidate.is_file())
}
