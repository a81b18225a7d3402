//! Shared types flowing through the discovery pipeline.
//!
//! The pipeline moves through three shapes: a [`ParsedStoryFile`] per
//! discovered file (discarded after normalization), a [`StoryModule`] per
//! well-formed file, and two [`VirtualRoute`]s per [`Story`]. Routes are
//! serialized to JSON by the CLI for inspection, so everything here derives
//! `Serialize`.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Raw parse result for a single discovered story file.
///
/// Immutable once built; consumed by the normalizer and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStoryFile {
    /// Absolute path of the file as discovered by the crawler.
    pub path: PathBuf,
    /// Whether the file has a default export (the component under preview).
    pub has_default_export: bool,
    /// Named exports in source order, `"default"` excluded.
    pub named_exports: Vec<String>,
}

/// A single story: one named export of a story module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    /// `<module id>/<slug(export name)>`. Unique among the module's stories.
    pub id: String,
    /// The export name as written in source (e.g., `Primary`).
    pub name: String,
    /// Advisory `extraHtml` metadata harvested from the story definition.
    /// Extraction is best-effort; absence never fails the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_html: Option<String>,
}

/// A well-formed story file after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryModule {
    /// `<directory>/<slug(name)>`, or `<slug(name)>` for root-level files.
    pub id: String,
    /// File base name with the `.stories.<ext>` suffix stripped (e.g., `Button`).
    pub name: String,
    /// Directory relative to the content root, forward slashes, no leading or
    /// trailing slash. Empty for files directly under the root.
    pub directory: String,
    /// Absolute source path in forward-slash form, for import statements.
    pub import_path: String,
    /// Stories in export order.
    pub stories: Vec<Story>,
}

/// Prop bag handed to the host renderer for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteProps {
    /// Dashboard views render with the module sidebar; standalone views don't.
    pub has_sidebar: bool,
    /// The story id, repeated here so the rendered page can self-identify.
    pub story: String,
}

/// One routable virtual page. Two exist per story: a dashboard view and a
/// standalone story view, sharing the story id but differing in pattern
/// prefix and `has_sidebar`.
#[derive(Debug, Clone, Serialize)]
pub struct VirtualRoute {
    /// URL pattern, `/dashboard/<id>` or `/stories/<id>`.
    pub pattern: String,
    /// Absolute forward-slash path of the virtual entrypoint under the
    /// codegen directory. Never written to disk by this crate.
    pub entrypoint: String,
    /// The owning module, shared read-only between the module's routes.
    pub module: Arc<StoryModule>,
    pub story: Story,
    pub props: RouteProps,
}
