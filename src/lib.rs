//! # Storydeck
//!
//! Story-file discovery and route-table generation for component preview
//! sites. Your filesystem is the data source: any file matching
//! `<Name>.stories.<ext>` becomes a module, each named export becomes a
//! story, and every story gets two routable virtual pages.
//!
//! # Architecture: Discovery Pipeline
//!
//! ```text
//! 1. Crawl       root/          →  sorted story file paths
//! 2. Parse       file           →  exported symbol names
//! 3. Normalize   parsed file    →  StoryModule (or excluded, with reason)
//! 4. Routes      modules        →  pattern → VirtualRoute map
//! ```
//!
//! Stages 2–3 run per file with no shared state, so they fan out across
//! files with rayon; aggregation afterwards preserves crawl order, which
//! keeps the whole table deterministic across runs and platforms.
//!
//! The pipeline is read-only: it computes which pages exist and where they
//! route, and hands entrypoint paths and prop bags to the host build tool.
//! Page source text for an entrypoint comes from [`entrypoint`], which is
//! pure. Nothing here executes or renders a component.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`crawl`] | Walks the content root, returns sorted story file paths |
//! | [`parse`] | Reads files, extracts exports via the [`parse::ExportExtractor`] seam |
//! | [`normalize`] | Derives ids, validates export shape, builds [`types::StoryModule`]s |
//! | [`routes`] | Expands stories into the `pattern → VirtualRoute` table |
//! | [`entrypoint`] | Generates virtual page source for a route (pure) |
//! | [`metadata`] | Advisory `extraHtml` extraction behind the [`metadata::MetadataLoader`] seam |
//! | [`naming`] | Slug derivation and posix path rewriting |
//! | [`config`] | Optional `storydeck.toml`: extensions, excluded directories |
//! | [`types`] | Shared data model |
//! | [`output`] | CLI display of modules and routes |
//!
//! # Design Decisions
//!
//! ## Static Metadata Extraction
//!
//! The optional `extraHtml` field on a story is resolved by scanning source
//! text, never by importing the module. Executing story files during
//! discovery would double-load them and run their import side effects just
//! to harvest an optional string. Hosts that want runtime-accurate values
//! can supply their own [`metadata::MetadataLoader`].
//!
//! ## Exclusion As Data
//!
//! A malformed story file (no default export, no named exports) normalizes
//! to an explicit [`normalize::Outcome::Excluded`] value rather than being
//! dropped in place. The route builder partitions outcomes in crawl order
//! and warns once per exclusion, so a file never vanishes silently.
//!
//! ## Fail Fast On Invariant Breaks
//!
//! Recoverable conditions (malformed files) warn and continue. Broken
//! preconditions — a relative root, a story id that would escape the route
//! namespace — indicate caller or pipeline bugs and abort immediately.

pub mod config;
pub mod crawl;
pub mod entrypoint;
pub mod metadata;
pub mod naming;
pub mod normalize;
pub mod output;
pub mod parse;
pub mod routes;
pub mod types;
