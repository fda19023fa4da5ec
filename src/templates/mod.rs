//! Template rendering module
//!
//! Wraps a handlebars registry: page templates from the views directory,
//! reusable partials from the partials directory, and the registered
//! helpers. Templates are registered once at startup; rendering an unknown
//! name is an error the caller turns into a 500.

mod helpers;

pub use helpers::{current_year, scream};

use handlebars::{Handlebars, RenderError};
use serde_json::Value;

use crate::logger;

/// Template renderer with pre-registered views, partials and helpers
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Build a renderer from the views and partials directories.
    ///
    /// Every `*.hbs` file is registered under its file stem. Partials are
    /// ordinary registered templates referenced with `{{> name}}`.
    pub fn new(views_dir: &str, partials_dir: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut registry = Handlebars::new();

        helpers::register(&mut registry);
        register_directory(&mut registry, views_dir)?;
        register_directory(&mut registry, partials_dir)?;

        Ok(Self { registry })
    }

    /// Render the named template against a context.
    ///
    /// Missing context keys render empty (non-strict mode); an unknown
    /// template name or a failing partial is an error.
    pub fn render(&self, name: &str, context: &Value) -> Result<String, RenderError> {
        self.registry.render(name, context)
    }
}

/// Register every `*.hbs` file directly under `dir` by file stem
fn register_directory(
    registry: &mut Handlebars<'static>,
    dir: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("hbs") {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            logger::log_warning(&format!(
                "Skipping template with non-UTF8 name: {}",
                path.display()
            ));
            continue;
        };

        registry.register_template_file(name, &path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> Renderer {
        Renderer::new("views", "views/partials").expect("views directories present")
    }

    #[test]
    fn test_render_substitutes_context() {
        let html = renderer()
            .render("home", &json!({
                "pageTitle": "Home Page",
                "welcomeMessage": "Hello there, friend!",
            }))
            .unwrap();

        assert!(html.contains("Home Page"));
        assert!(html.contains("Hello there, friend!"));
    }

    #[test]
    fn test_partials_are_inlined() {
        let html = renderer()
            .render("about", &json!({ "pageTitle": "About Page" }))
            .unwrap();

        // Header and footer come from partials
        assert!(html.contains("<header>"));
        assert!(html.contains("<footer>"));
        assert!(html.contains(&current_year().to_string()));
    }

    #[test]
    fn test_helpers_run_inside_templates() {
        let html = renderer()
            .render("about", &json!({ "pageTitle": "About Page" }))
            .unwrap();

        // The footer shouts its tagline through screamIt
        assert!(html.contains("MADE WITH RUST"));
    }

    #[test]
    fn test_missing_context_key_renders_empty() {
        let html = renderer().render("about", &json!({})).unwrap();
        assert!(html.contains("<title></title>"));
    }

    #[test]
    fn test_unknown_template_errors() {
        assert!(renderer().render("no-such-view", &json!({})).is_err());
    }
}
