//! Identifier derivation for modules and stories.
//!
//! Module and story ids are built from filesystem names and export names,
//! both of which arrive in author casing (`Button`, `PrimaryDark`,
//! `HTTPHeader`). [`slugify`] maps them to a stable lowercase-hyphenated
//! form so the same input always yields the same route segment:
//!
//! - `MyButton` → `my-button`
//! - `HTTPServer` → `http-server`
//! - `primary_dark` → `primary-dark`
//! - `nav menu` → `nav-menu`
//!
//! [`to_posix`] rewrites host paths to forward-slash form so import paths
//! and entrypoint paths look identical across platforms.

use std::path::Path;

/// Lowercase-hyphenate a name at word boundaries.
///
/// A boundary exists before an uppercase letter that follows a lowercase
/// letter or digit (`myButton`), and before the last uppercase letter of an
/// uppercase run that is followed by a lowercase letter (`HTTPServer` →
/// `http-server`). Non-alphanumeric characters become hyphens; consecutive
/// hyphens collapse; leading and trailing hyphens are stripped.
pub fn slugify(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            out.push('-');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map(|n| n.is_lowercase()).unwrap_or(false);
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }

    // Collapse consecutive hyphens
    let mut collapsed = String::with_capacity(out.len());
    let mut prev_dash = false;
    for c in out.chars() {
        if c == '-' {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        } else {
            collapsed.push(c);
            prev_dash = false;
        }
    }

    collapsed.trim_matches('-').to_string()
}

/// Rewrite a path to forward-slash form.
///
/// On Unix this is a plain string conversion; on Windows backslash
/// separators are replaced so generated import statements stay portable.
pub fn to_posix(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
