//! Story module normalization.
//!
//! Stage 3 of the discovery pipeline. Takes one [`ParsedStoryFile`] and
//! either builds the [`StoryModule`] it describes or excludes it with a
//! reason the caller can log:
//!
//! - no named exports → nothing to preview, excluded
//! - no default export → no component to mount, excluded
//!
//! Both defects are per-file and recoverable; the run continues past them.
//!
//! ## Identifier derivation
//!
//! The module id comes from the file's position under the content root:
//!
//! ```text
//! root = /proj/src
//! /proj/src/buttons/Button.stories.tsx
//!   → directory "buttons", name "Button", id "buttons/button"
//! /proj/src/Card.stories.ts
//!   → directory "",        name "Card",   id "card"
//! ```
//!
//! Each named export becomes a story with id `<module id>/<slug(export)>`,
//! in export order. Metadata enrichment per story is delegated to the
//! [`MetadataLoader`](crate::metadata::MetadataLoader) and never fails the
//! module.

use crate::crawl::STORY_INFIX;
use crate::metadata::MetadataLoader;
use crate::naming::{slugify, to_posix};
use crate::types::{ParsedStoryFile, Story, StoryModule};
use std::path::Path;

/// Why a parsed file produced no module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludeReason {
    NoNamedExports,
    NoDefaultExport,
}

impl ExcludeReason {
    pub fn describe(self) -> &'static str {
        match self {
            ExcludeReason::NoNamedExports => "no named exports",
            ExcludeReason::NoDefaultExport => "no default export",
        }
    }
}

/// Per-file normalization result. Excluded files keep their path and reason
/// so the caller can warn deterministically in crawl order.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Included(StoryModule),
    Excluded {
        path: std::path::PathBuf,
        reason: ExcludeReason,
    },
}

/// Normalize one parsed file into a module, or exclude it.
///
/// `root` must be the crawl root the file was discovered under; a file
/// outside `root` violates the crawler contract and panics.
pub fn normalize(
    root: &Path,
    parsed: &ParsedStoryFile,
    loader: &impl MetadataLoader,
) -> Outcome {
    if parsed.named_exports.is_empty() {
        return Outcome::Excluded {
            path: parsed.path.clone(),
            reason: ExcludeReason::NoNamedExports,
        };
    }
    if !parsed.has_default_export {
        return Outcome::Excluded {
            path: parsed.path.clone(),
            reason: ExcludeReason::NoDefaultExport,
        };
    }

    let rel = parsed
        .path
        .strip_prefix(root)
        .expect("crawler yields paths under the content root");
    let rel = to_posix(rel);
    let trimmed = strip_story_suffix(&rel);

    let mut segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
    let name = segments
        .pop()
        .expect("story file path has at least a file name segment")
        .to_string();
    let directory = segments.join("/");

    let module_id = if directory.is_empty() {
        slugify(&name)
    } else {
        format!("{directory}/{}", slugify(&name))
    };

    let stories = parsed
        .named_exports
        .iter()
        .map(|export| Story {
            id: format!("{module_id}/{}", slugify(export)),
            name: export.clone(),
            extra_html: loader.extra_html(&parsed.path, export),
        })
        .collect();

    Outcome::Included(StoryModule {
        id: module_id,
        name,
        directory,
        import_path: to_posix(&parsed.path),
        stories,
    })
}

/// Strip `.stories.<ext>` from the end of a path string, case-insensitively.
fn strip_story_suffix(rel: &str) -> &str {
    match rel.to_ascii_lowercase().rfind(STORY_INFIX) {
        Some(idx) => &rel[..idx],
        None => rel,
    }
}
