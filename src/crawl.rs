//! Filesystem crawling for story files.
//!
//! Stage 1 of the discovery pipeline. Walks the content root and returns
//! every file matching the `<Name>.stories.<ext>` convention:
//!
//! ```text
//! src/                              # Content root
//! ├── Card.stories.ts               # Root-level module → id "card"
//! ├── buttons/
//! │   ├── Button.tsx
//! │   └── Button.stories.tsx        # → id "buttons/button"
//! ├── nav/menu/Menu.stories.svelte  # → id "nav/menu/menu"
//! └── node_modules/                 # Never crawled, at any depth
//! ```
//!
//! The walk follows symlinks and skips any subtree rooted at an excluded
//! directory name (`node_modules` by default). Results are sorted
//! lexicographically by path string so the ordering is reproducible across
//! runs and platforms, independent of filesystem iteration order.

use crate::config::DiscoveryConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("content root must be an absolute path: {0}")]
    RelativeRoot(PathBuf),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Infix separating the component name from the recognized extension.
pub const STORY_INFIX: &str = ".stories.";

/// List all story files under `root`, sorted by path string.
///
/// `root` must be absolute — discovery output embeds absolute import paths,
/// so a relative root indicates a caller bug, not a recoverable condition.
pub fn list_story_files(
    root: &Path,
    cfg: &DiscoveryConfig,
) -> Result<Vec<PathBuf>, CrawlError> {
    if !root.is_absolute() {
        return Err(CrawlError::RelativeRoot(root.to_path_buf()));
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();
    let mut files = Vec::new();
    for entry in walker.filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        !(e.file_type().is_dir() && cfg.exclude_dirs.iter().any(|d| name == d.as_str()))
    }) {
        let entry = entry?;
        if entry.file_type().is_file()
            && is_story_file(&entry.file_name().to_string_lossy(), cfg)
        {
            files.push(entry.into_path());
        }
    }

    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    Ok(files)
}

/// Check a file name against the `<Name>.stories.<ext>` convention.
///
/// The suffix match is case-insensitive; the name part must be non-empty.
fn is_story_file(name: &str, cfg: &DiscoveryConfig) -> bool {
    let lower = name.to_ascii_lowercase();
    cfg.extensions.iter().any(|ext| {
        let suffix = format!("{STORY_INFIX}{ext}");
        lower.ends_with(&suffix) && lower.len() > suffix.len()
    })
}
