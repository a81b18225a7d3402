//! CLI output formatting for discovery results.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every module is its id, with the source path as indented context, and
//! each story listed below it.
//!
//! ```text
//! Modules
//! 001 buttons/button (2 stories)
//!     Source: buttons/Button.stories.tsx
//!     Primary → buttons/button/primary
//!     Ghost → buttons/button/ghost
//! ```

use crate::types::{StoryModule, VirtualRoute};
use std::collections::BTreeMap;
use std::path::Path;

/// Format the module inventory, one header plus context lines per module.
pub fn format_scan(modules: &[StoryModule], root: &Path) -> Vec<String> {
    let mut lines = vec!["Modules".to_string()];
    let root = crate::naming::to_posix(root);

    for (idx, module) in modules.iter().enumerate() {
        let noun = if module.stories.len() == 1 { "story" } else { "stories" };
        lines.push(format!(
            "{:03} {} ({} {noun})",
            idx + 1,
            module.id,
            module.stories.len()
        ));
        let source = module
            .import_path
            .strip_prefix(&format!("{root}/"))
            .unwrap_or(&module.import_path);
        lines.push(format!("    Source: {source}"));
        for story in &module.stories {
            lines.push(format!("    {} → {}", story.name, story.id));
        }
    }
    lines
}

/// Format the route table, one line per pattern.
pub fn format_routes(table: &BTreeMap<String, VirtualRoute>) -> Vec<String> {
    table
        .iter()
        .map(|(pattern, route)| format!("{pattern} → {}", route.entrypoint))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RouteProps, Story};
    use std::sync::Arc;

    fn module() -> StoryModule {
        StoryModule {
            id: "buttons/button".to_string(),
            name: "Button".to_string(),
            directory: "buttons".to_string(),
            import_path: "/proj/src/buttons/Button.stories.tsx".to_string(),
            stories: vec![
                Story {
                    id: "buttons/button/primary".to_string(),
                    name: "Primary".to_string(),
                    extra_html: None,
                },
                Story {
                    id: "buttons/button/ghost".to_string(),
                    name: "Ghost".to_string(),
                    extra_html: None,
                },
            ],
        }
    }

    #[test]
    fn scan_output_headers_and_context() {
        let lines = format_scan(&[module()], Path::new("/proj/src"));
        assert_eq!(lines[0], "Modules");
        assert_eq!(lines[1], "001 buttons/button (2 stories)");
        assert_eq!(lines[2], "    Source: buttons/Button.stories.tsx");
        assert_eq!(lines[3], "    Primary → buttons/button/primary");
    }

    #[test]
    fn singular_story_noun() {
        let mut m = module();
        m.stories.truncate(1);
        let lines = format_scan(&[m], Path::new("/proj/src"));
        assert!(lines[1].ends_with("(1 story)"));
    }

    #[test]
    fn route_lines_show_pattern_and_entrypoint() {
        let m = Arc::new(module());
        let story = m.stories[0].clone();
        let mut table = BTreeMap::new();
        table.insert(
            "/dashboard/buttons/button/primary".to_string(),
            VirtualRoute {
                pattern: "/dashboard/buttons/button/primary".to_string(),
                entrypoint: "/codegen/dashboard/buttons/button/primary.astro".to_string(),
                module: m,
                story: story.clone(),
                props: RouteProps {
                    has_sidebar: true,
                    story: story.id,
                },
            },
        );

        let lines = format_routes(&table);
        assert_eq!(
            lines,
            vec![
                "/dashboard/buttons/button/primary → /codegen/dashboard/buttons/button/primary.astro"
            ]
        );
    }
}
