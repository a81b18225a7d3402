//! Story file parsing and export extraction.
//!
//! Stage 2 of the discovery pipeline. Each crawled file is read and handed
//! to an [`ExportExtractor`], which returns the file's top-level exported
//! names in source order — `"default"` included when the file has a default
//! export. The parser classifies that marker out, leaving the named exports
//! that become stories.
//!
//! The extractor is a trait seam so hosts with a real bundler-grade parser
//! can plug it in. The built-in [`EsModuleExportScanner`] covers the export
//! forms story files use in practice:
//!
//! ```text
//! export default { title: "Button" };
//! export const Primary = { args: {} };
//! export function Disabled() {}
//! export class Widget {}
//! export { Primary as First, Ghost };
//! ```
//!
//! Read failures propagate — a file the crawler found but the parser cannot
//! read is an environment problem, never silently skipped.

use crate::types::ParsedStoryFile;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read story file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Returns the exported symbol names of a source file in source order.
///
/// `"default"` must appear in the result when the file has a default
/// export; all other entries are named exports.
pub trait ExportExtractor: Sync {
    fn extract_exports(&self, source: &str) -> Vec<String>;
}

impl<F> ExportExtractor for F
where
    F: Fn(&str) -> Vec<String> + Sync,
{
    fn extract_exports(&self, source: &str) -> Vec<String> {
        self(source)
    }
}

/// Read and parse one story file.
pub fn parse_story_file(
    path: &Path,
    extractor: &impl ExportExtractor,
) -> Result<ParsedStoryFile, ParseError> {
    let source = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let exports = extractor.extract_exports(&source);
    let has_default_export = exports.iter().any(|e| e == "default");
    let named_exports = exports.into_iter().filter(|e| e != "default").collect();

    Ok(ParsedStoryFile {
        path: path.to_path_buf(),
        has_default_export,
        named_exports,
    })
}

/// Regex-based export scanner for ES-module story files.
///
/// Recognizes default exports, declaration exports (`const`/`let`/`var`/
/// `function`/`class`), and export lists with `as` renames. Exports inside
/// comments or strings are not distinguished — story files are generated
/// or hand-written data modules where that ambiguity doesn't arise.
pub struct EsModuleExportScanner {
    default_re: Regex,
    decl_re: Regex,
    list_re: Regex,
}

impl EsModuleExportScanner {
    pub fn new() -> Self {
        Self {
            default_re: Regex::new(r"(?m)^\s*export\s+default\b").unwrap(),
            decl_re: Regex::new(
                r"(?m)^\s*export\s+(?:const|let|var|async\s+function\*?|function\*?|class)\s+([A-Za-z_$][A-Za-z0-9_$]*)",
            )
            .unwrap(),
            list_re: Regex::new(r"(?m)^\s*export\s*\{([^}]*)\}").unwrap(),
        }
    }
}

impl Default for EsModuleExportScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportExtractor for EsModuleExportScanner {
    fn extract_exports(&self, source: &str) -> Vec<String> {
        // Collect (position, name) from each export form, then merge in
        // source order. First occurrence wins for duplicates.
        let mut found: Vec<(usize, String)> = Vec::new();

        for m in self.default_re.find_iter(source) {
            found.push((m.start(), "default".to_string()));
        }
        for cap in self.decl_re.captures_iter(source) {
            let m = cap.get(0).unwrap();
            found.push((m.start(), cap[1].to_string()));
        }
        for cap in self.list_re.captures_iter(source) {
            let list = cap.get(1).unwrap();
            let mut offset = list.start();
            for item in list.as_str().split(',') {
                // `Primary as First` exports under the rename target
                let name = item.rsplit(" as ").next().unwrap_or(item).trim();
                if !name.is_empty() {
                    found.push((offset, name.to_string()));
                }
                offset += item.len() + 1;
            }
        }

        found.sort_by_key(|(pos, _)| *pos);

        let mut exports = Vec::with_capacity(found.len());
        for (_, name) in found {
            if !exports.contains(&name) {
                exports.push(name);
            }
        }
        exports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan(source: &str) -> Vec<String> {
        EsModuleExportScanner::new().extract_exports(source)
    }

    #[test]
    fn default_export_detected() {
        assert_eq!(scan("export default { title: \"Button\" };"), vec!["default"]);
    }

    #[test]
    fn const_exports_in_source_order() {
        let src = "export const Primary = {};\nexport const Ghost = {};\n";
        assert_eq!(scan(src), vec!["Primary", "Ghost"]);
    }

    #[test]
    fn function_and_class_exports() {
        let src = "export function Disabled() {}\nexport class Widget {}\nexport async function Load() {}\n";
        assert_eq!(scan(src), vec!["Disabled", "Widget", "Load"]);
    }

    #[test]
    fn export_list_with_renames() {
        let src = "const a = 1;\nconst b = 2;\nexport { a as First, b };\n";
        assert_eq!(scan(src), vec!["First", "b"]);
    }

    #[test]
    fn rename_to_default_counts_as_default() {
        let src = "const Button = {};\nexport { Button as default };\n";
        assert_eq!(scan(src), vec!["default"]);
    }

    #[test]
    fn mixed_forms_preserve_source_order() {
        let src = "export default {};\nexport const Primary = {};\nexport { Primary as Alias };\n";
        assert_eq!(scan(src), vec!["default", "Primary", "Alias"]);
    }

    #[test]
    fn duplicate_names_deduplicated() {
        let src = "export const Primary = {};\nexport { Primary };\n";
        assert_eq!(scan(src), vec!["Primary"]);
    }

    #[test]
    fn no_exports_yields_empty() {
        assert!(scan("const internal = 1;\n").is_empty());
    }

    #[test]
    fn parse_classifies_default_and_named() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Button.stories.tsx");
        fs::write(&path, "export default {};\nexport const Primary = {};\n").unwrap();

        let parsed = parse_story_file(&path, &EsModuleExportScanner::new()).unwrap();
        assert!(parsed.has_default_export);
        assert_eq!(parsed.named_exports, vec!["Primary"]);
        assert_eq!(parsed.path, path);
    }

    #[test]
    fn parse_read_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("Gone.stories.ts");

        let result = parse_story_file(&missing, &EsModuleExportScanner::new());
        assert!(matches!(result, Err(ParseError::Read { .. })));
    }

    #[test]
    fn closure_extractor_usable_through_trait() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("X.stories.ts");
        fs::write(&path, "whatever").unwrap();

        let fixed = |_: &str| vec!["default".to_string(), "One".to_string()];
        let parsed = parse_story_file(&path, &fixed).unwrap();
        assert!(parsed.has_default_export);
        assert_eq!(parsed.named_exports, vec!["One"]);
    }
}
