//! Virtual entrypoint source generation.
//!
//! Maps a [`VirtualRoute`] to the source text of its entrypoint page. The
//! host build tool registers that text under the route's `entrypoint` path;
//! nothing is written to disk here and the function is pure.
//!
//! The generated page imports the owning story module, mounts its default
//! export as the component, and spreads the story's export as props:
//!
//! ```text
//! ---
//! import * as stories from "/proj/src/buttons/Button.stories.tsx";
//! const Component = stories.default;
//! const story = stories.Primary;
//! ---
//! <Component {...story} client:load />
//! ```
//!
//! In [`RenderMode::Hydrated`] (a non-native component framework behind the
//! preview) the mount carries an eager client-hydration directive; native
//! rendering omits it. An optional extra component is imported and rendered
//! with the story name, module name, module directory, and the story's
//! `extraHtml` metadata.
//!
//! Interpolations are never raw: export and component names must be valid
//! JS identifiers, and paths and attribute values go through string-literal
//! or attribute escaping. A name that fails validation is a
//! [`TemplateError`], not a malformed page.

use crate::types::VirtualRoute;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("not a valid component identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// How the host renders components on the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Components render natively; no hydration directive.
    Native,
    /// Components need eager client-side hydration to become interactive.
    Hydrated,
}

/// An additional component rendered below the story preview.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraComponent {
    /// Absolute forward-slash import path.
    pub import_path: String,
    /// Local identifier the component is imported as.
    pub name: String,
}

/// Render the entrypoint source for one route.
pub fn render_entrypoint(
    route: &VirtualRoute,
    mode: RenderMode,
    extra: Option<&ExtraComponent>,
) -> Result<String, TemplateError> {
    let story_ident = validated_identifier(&route.story.name)?;

    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(&format!(
        "import * as stories from {};\n",
        js_string(&route.module.import_path)
    ));
    if let Some(extra) = extra {
        let extra_ident = validated_identifier(&extra.name)?;
        out.push_str(&format!(
            "import {extra_ident} from {};\n",
            js_string(&extra.import_path)
        ));
    }
    out.push_str("const Component = stories.default;\n");
    out.push_str(&format!("const story = stories.{story_ident};\n"));
    out.push_str("---\n");

    match mode {
        RenderMode::Hydrated => out.push_str("<Component {...story} client:load />\n"),
        RenderMode::Native => out.push_str("<Component {...story} />\n"),
    }

    if let Some(extra) = extra {
        let extra_html = match &route.story.extra_html {
            Some(html) => js_string(html),
            None => "undefined".to_string(),
        };
        out.push_str(&format!(
            "<{} storyName=\"{}\" moduleName=\"{}\" directory=\"{}\" extraHtml={{{extra_html}}} />\n",
            extra.name,
            attr_text(&route.story.name),
            attr_text(&route.module.name),
            attr_text(&route.module.directory),
        ));
    }

    Ok(out)
}

fn validated_identifier(name: &str) -> Result<&str, TemplateError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(TemplateError::InvalidIdentifier(name.to_string()))
    }
}

/// Double-quoted JS string literal with escapes.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape for a double-quoted attribute value.
fn attr_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RouteProps, Story, StoryModule};
    use std::sync::Arc;

    fn route(export_name: &str, extra_html: Option<&str>) -> VirtualRoute {
        let story = Story {
            id: format!("buttons/button/{}", crate::naming::slugify(export_name)),
            name: export_name.to_string(),
            extra_html: extra_html.map(String::from),
        };
        let module = Arc::new(StoryModule {
            id: "buttons/button".to_string(),
            name: "Button".to_string(),
            directory: "buttons".to_string(),
            import_path: "/proj/src/buttons/Button.stories.tsx".to_string(),
            stories: vec![story.clone()],
        });
        VirtualRoute {
            pattern: format!("/dashboard/{}", story.id),
            entrypoint: format!("/codegen/dashboard/{}.astro", story.id),
            module,
            story: story.clone(),
            props: RouteProps {
                has_sidebar: true,
                story: story.id,
            },
        }
    }

    #[test]
    fn imports_module_and_selects_default() {
        let text = render_entrypoint(&route("Primary", None), RenderMode::Hydrated, None).unwrap();
        assert!(text.contains(
            "import * as stories from \"/proj/src/buttons/Button.stories.tsx\";"
        ));
        assert!(text.contains("const Component = stories.default;"));
        assert!(text.contains("const story = stories.Primary;"));
    }

    #[test]
    fn hydrated_mode_adds_client_directive() {
        let text = render_entrypoint(&route("Primary", None), RenderMode::Hydrated, None).unwrap();
        assert!(text.contains("<Component {...story} client:load />"));
    }

    #[test]
    fn native_mode_omits_client_directive() {
        let text = render_entrypoint(&route("Primary", None), RenderMode::Native, None).unwrap();
        assert!(text.contains("<Component {...story} />"));
        assert!(!text.contains("client:load"));
    }

    #[test]
    fn extra_component_rendered_with_four_inputs() {
        let extra = ExtraComponent {
            import_path: "/proj/.storydeck/StoryFrame.astro".to_string(),
            name: "StoryFrame".to_string(),
        };
        let text = render_entrypoint(
            &route("Primary", Some("<p>doc</p>")),
            RenderMode::Hydrated,
            Some(&extra),
        )
        .unwrap();

        assert!(text.contains("import StoryFrame from \"/proj/.storydeck/StoryFrame.astro\";"));
        assert!(text.contains("storyName=\"Primary\""));
        assert!(text.contains("moduleName=\"Button\""));
        assert!(text.contains("directory=\"buttons\""));
        assert!(text.contains("extraHtml={\"<p>doc</p>\"}"));
    }

    #[test]
    fn absent_metadata_renders_undefined() {
        let extra = ExtraComponent {
            import_path: "/x/Frame.astro".to_string(),
            name: "Frame".to_string(),
        };
        let text =
            render_entrypoint(&route("Primary", None), RenderMode::Hydrated, Some(&extra)).unwrap();
        assert!(text.contains("extraHtml={undefined}"));
    }

    #[test]
    fn invalid_export_name_is_error() {
        let result = render_entrypoint(
            &route("not-an-identifier", None),
            RenderMode::Hydrated,
            None,
        );
        assert!(matches!(result, Err(TemplateError::InvalidIdentifier(_))));
    }

    #[test]
    fn invalid_extra_name_is_error() {
        let extra = ExtraComponent {
            import_path: "/x/Frame.astro".to_string(),
            name: "1Frame".to_string(),
        };
        let result = render_entrypoint(&route("Primary", None), RenderMode::Hydrated, Some(&extra));
        assert!(matches!(result, Err(TemplateError::InvalidIdentifier(_))));
    }

    #[test]
    fn quotes_in_paths_escaped() {
        let mut r = route("Primary", None);
        let module = StoryModule {
            import_path: "/proj/we\"ird/Button.stories.tsx".to_string(),
            ..(*r.module).clone()
        };
        r.module = Arc::new(module);

        let text = render_entrypoint(&r, RenderMode::Native, None).unwrap();
        assert!(text.contains("\"/proj/we\\\"ird/Button.stories.tsx\""));
    }

    #[test]
    fn metadata_markup_escaped_in_literal() {
        let extra = ExtraComponent {
            import_path: "/x/Frame.astro".to_string(),
            name: "Frame".to_string(),
        };
        let text = render_entrypoint(
            &route("Primary", Some("say \"hi\"")),
            RenderMode::Native,
            Some(&extra),
        )
        .unwrap();
        assert!(text.contains("extraHtml={\"say \\\"hi\\\"\"}"));
    }

    #[test]
    fn generation_is_pure_and_deterministic() {
        let r = route("Primary", Some("<p>x</p>"));
        let a = render_entrypoint(&r, RenderMode::Hydrated, None).unwrap();
        let b = render_entrypoint(&r, RenderMode::Hydrated, None).unwrap();
        assert_eq!(a, b);
    }
}
