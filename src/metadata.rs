//! Advisory story metadata extraction.
//!
//! Story definitions may carry an `extraHtml` field alongside their args:
//!
//! ```text
//! export const Primary = {
//!     args: { label: "Save" },
//!     extraHtml: "<p>Shown below the preview</p>",
//! };
//! ```
//!
//! The field is a side channel for the preview page, not part of the story
//! contract, so extraction is strictly best-effort: a missing file, an
//! unreadable file, or an export without the field all yield `None` for
//! that story alone. Siblings in the same module are unaffected and module
//! construction never fails on metadata.
//!
//! The built-in [`StaticArgsLoader`] resolves the field from source text
//! without loading or executing the module, so discovery stays free of
//! import side effects and double-loading. Hosts that need richer
//! resolution implement [`MetadataLoader`] themselves.

use regex::Regex;
use std::path::Path;

/// Resolves the optional `extraHtml` metadata for one story export.
///
/// Every failure mode maps to `None`; implementations must not panic or
/// propagate errors.
pub trait MetadataLoader: Sync {
    fn extra_html(&self, story_file: &Path, export_name: &str) -> Option<String>;
}

impl<F> MetadataLoader for F
where
    F: Fn(&Path, &str) -> Option<String> + Sync,
{
    fn extra_html(&self, story_file: &Path, export_name: &str) -> Option<String> {
        self(story_file, export_name)
    }
}

/// Static `extraHtml` resolver: scans the export's declaration text for a
/// string-literal `extraHtml` field.
pub struct StaticArgsLoader {
    field_re: Regex,
}

impl StaticArgsLoader {
    pub fn new() -> Self {
        Self {
            field_re: Regex::new(
                r#"extraHtml\s*:\s*(?:"([^"\\]*)"|'([^'\\]*)'|`([^`\\]*)`)"#,
            )
            .unwrap(),
        }
    }

    /// The source slice belonging to one export: from its declaration to
    /// the next top-level `export` or end of file.
    fn export_block<'a>(&self, source: &'a str, export_name: &str) -> Option<&'a str> {
        let decl = Regex::new(&format!(
            r"(?m)^\s*export\s+(?:const|let|var)\s+{}\b",
            regex::escape(export_name)
        ))
        .ok()?;
        let start = decl.find(source)?.start();
        let rest = &source[start..];
        let end = Regex::new(r"(?m)^\s*export\s")
            .ok()?
            .find_iter(rest)
            .nth(1)
            .map(|m| m.start())
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

impl Default for StaticArgsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataLoader for StaticArgsLoader {
    fn extra_html(&self, story_file: &Path, export_name: &str) -> Option<String> {
        let source = std::fs::read_to_string(story_file).ok()?;
        let block = self.export_block(&source, export_name)?;
        let cap = self.field_re.captures(block)?;
        let value = cap.get(1).or_else(|| cap.get(2)).or_else(|| cap.get(3))?;
        Some(value.as_str().to_string())
    }
}
