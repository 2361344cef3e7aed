//! Recursive file discovery.
//!
//! Walks a directory tree with `walkdir` and keeps regular files whose
//! extension is in the configured set.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Options for file discovery.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// File extensions to include, with or without the leading dot
    pub extensions: Vec<String>,
    /// Skip hidden files and directories
    pub skip_hidden: bool,
    /// Descend into symlinked directories while walking
    pub follow_links: bool,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["ahk".to_string()],
            skip_hidden: true,
            follow_links: false,
        }
    }
}

/// Discover files recursively under `root` matching the configured extensions.
///
/// Returned paths are `root` joined with the relative path of each file, in
/// file-name order per directory. A missing or non-directory root yields an
/// empty list; unreadable entries below the root are skipped.
#[must_use]
pub fn discover_files<P: AsRef<Path>>(root: P, options: &DiscoverOptions) -> Vec<PathBuf> {
    let root = root.as_ref();

    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "discovery root is not a directory");
        return Vec::new();
    }

    let extensions: Vec<String> = options
        .extensions
        .iter()
        .map(|e| normalize_extension(e))
        .collect();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !(options.skip_hidden && is_hidden(entry)));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !is_script_file(&entry) {
            continue;
        }

        if has_extension(entry.path(), &extensions) {
            files.push(entry.into_path());
        }
    }

    files
}

/// Regular files, plus symlinks whose target is a regular file.
fn is_script_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Normalize extension: lowercase, no leading dot.
fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
