// Cache path utilities.
// Maps cache keys to files under the platform cache directory.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/folio on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// File name backing a cache key.
pub fn entry_file_name(key: &str) -> String {
    format!("{}.json", sanitize_name(key))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
