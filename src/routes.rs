//! Route table construction.
//!
//! Final stage of the discovery pipeline. Runs crawl → parse → normalize,
//! then expands every story into its two virtual pages:
//!
//! ```text
//! story "buttons/button/primary"
//!   → /dashboard/buttons/button/primary   (sidebar view)
//!   → /stories/buttons/button/primary     (standalone view)
//! ```
//!
//! Per-file work is independent, so parsing and normalization fan out
//! across files with rayon. Collection preserves crawl order regardless of
//! completion order, keeping the table deterministic.
//!
//! Patterns are unique by construction — story ids are unique and each
//! route adds a fixed, distinct prefix — but insertion still asserts
//! uniqueness. A story id starting with `..` or `/` would escape the route
//! namespace; that is a programming bug and panics rather than degrading
//! into a malformed table.

use crate::config::DiscoveryConfig;
use crate::crawl::{self, CrawlError};
use crate::metadata::MetadataLoader;
use crate::naming::to_posix;
use crate::normalize::{self, Outcome};
use crate::parse::{self, ExportExtractor, ParseError};
use crate::types::{RouteProps, StoryModule, VirtualRoute};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error(transparent)]
    Crawl(#[from] CrawlError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("codegen dir must be an absolute path: {0}")]
    RelativeCodegenDir(PathBuf),
}

/// Pattern prefix for the sidebar (dashboard) view of a story.
pub const DASHBOARD_PREFIX: &str = "/dashboard";
/// Pattern prefix for the standalone view of a story.
pub const STORY_PREFIX: &str = "/stories";

/// Discover all well-formed story modules under `root`, in crawl order.
///
/// Malformed files (no default export, no named exports) are warned about
/// and excluded; a read failure aborts the whole run.
pub fn story_modules(
    root: &Path,
    extractor: &impl ExportExtractor,
    loader: &impl MetadataLoader,
    cfg: &DiscoveryConfig,
) -> Result<Vec<StoryModule>, DiscoverError> {
    let files = crawl::list_story_files(root, cfg)?;
    debug!(root = %root.display(), files = files.len(), "crawl complete");

    // Fan out per file; rayon's collect keeps crawl order.
    let outcomes = files
        .par_iter()
        .map(|path| {
            let parsed = parse::parse_story_file(path, extractor)?;
            Ok(normalize::normalize(root, &parsed, loader))
        })
        .collect::<Result<Vec<Outcome>, ParseError>>()?;

    let mut modules = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Outcome::Included(module) => modules.push(module),
            Outcome::Excluded { path, reason } => {
                warn!(path = %path.display(), "skipping story file: {}", reason.describe());
            }
        }
    }
    Ok(modules)
}

/// Build the full `pattern → VirtualRoute` table.
///
/// `codegen_dir` is only used to compute entrypoint paths; nothing is
/// written to disk here.
pub fn build_route_table(
    root: &Path,
    codegen_dir: &Path,
    extractor: &impl ExportExtractor,
    loader: &impl MetadataLoader,
    cfg: &DiscoveryConfig,
) -> Result<BTreeMap<String, VirtualRoute>, DiscoverError> {
    if !codegen_dir.is_absolute() {
        return Err(DiscoverError::RelativeCodegenDir(codegen_dir.to_path_buf()));
    }

    let modules = story_modules(root, extractor, loader, cfg)?;
    let codegen = to_posix(codegen_dir);

    let mut table = BTreeMap::new();
    let mut story_count = 0usize;
    let module_count = modules.len();

    for module in modules {
        let module = Arc::new(module);
        for story in &module.stories {
            validate_story_id(&story.id);
            story_count += 1;

            for (prefix, has_sidebar) in [(DASHBOARD_PREFIX, true), (STORY_PREFIX, false)] {
                let pattern = format!("{prefix}/{}", story.id);
                let route = VirtualRoute {
                    pattern: pattern.clone(),
                    entrypoint: format!("{codegen}{pattern}.astro"),
                    module: Arc::clone(&module),
                    story: story.clone(),
                    props: RouteProps {
                        has_sidebar,
                        story: story.id.clone(),
                    },
                };
                let previous = table.insert(pattern, route);
                assert!(
                    previous.is_none(),
                    "duplicate route pattern for story {}",
                    story.id
                );
            }
        }
    }

    info!(
        modules = module_count,
        stories = story_count,
        routes = table.len(),
        "route table built"
    );
    Ok(table)
}

/// A story id must stay inside the route namespace. Ids are derived from
/// slugs and can't normally violate this; a violation means a broken
/// extractor or normalizer, so fail fast.
fn validate_story_id(id: &str) {
    if id.starts_with("..") || id.starts_with('/') {
        panic!("story id escapes the route namespace: {id:?}");
    }
}
