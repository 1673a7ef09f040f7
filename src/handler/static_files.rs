//! Static file resolution and loading
//!
//! Maps a request path onto the serving root, with index file support and a
//! canonicalization guard so requests can never escape the root.

use crate::http::mime;
use crate::logger;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a request path against the serving root.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file to serve.
    File(PathBuf),
    /// A directory with no matching index file.
    Directory(PathBuf),
    /// A directory requested without its trailing slash.
    Redirect(String),
    NotFound,
}

/// Resolve a request path to a filesystem target.
///
/// The serving root must already be canonical. Directory requests without a
/// trailing slash redirect to the slashed form; with a slash, index files
/// are probed in order before falling back to the directory itself.
pub async fn resolve(root: &Path, request_path: &str, index_files: &[String]) -> Resolved {
    let relative = request_path.trim_start_matches('/');

    // Cheap reject before touching the filesystem
    if relative.split('/').any(|component| component == "..") {
        logger::log_warning(&format!("Rejected traversal path: {request_path}"));
        return Resolved::NotFound;
    }

    let joined = root.join(relative);

    // Not found is the common case, nothing to log
    let Ok(canonical) = joined.canonicalize() else {
        return Resolved::NotFound;
    };

    // Symlinks may still point outside the root
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Blocked path escaping serving root: {} -> {}",
            request_path,
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    if canonical.is_dir() {
        if !request_path.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }
        for index in index_files {
            let index_path = canonical.join(index);
            if index_path.is_file() {
                return Resolved::File(index_path);
            }
        }
        return Resolved::Directory(canonical);
    }

    Resolved::File(canonical)
}

/// Read a resolved file and infer its content type from the extension.
pub async fn load_file(path: &Path) -> Option<(Vec<u8>, &'static str)> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {}", path.display(), e));
            return None;
        }
    };

    let content_type = mime::content_type_for(path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
