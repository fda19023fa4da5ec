//! Template helper functions
//!
//! Helpers are invoked from templates in place of a context value:
//! `{{getCurrentYear}}` and `{{screamIt someText}}`.

use chrono::{Datelike, Local};
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};

/// Register all helpers under their template-visible names
pub fn register(registry: &mut Handlebars<'static>) {
    registry.register_helper("getCurrentYear", Box::new(get_current_year));
    registry.register_helper("screamIt", Box::new(scream_it));
}

/// Current calendar year, recomputed on every call
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Upper-case a piece of text
pub fn scream(text: &str) -> String {
    text.to_uppercase()
}

fn get_current_year(
    _: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&current_year().to_string())?;
    Ok(())
}

fn scream_it(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("screamIt", 0))?;

    out.write(&scream(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scream() {
        assert_eq!(scream("hello"), "HELLO");
        assert_eq!(scream(""), "");
        assert_eq!(scream("Hello there, friend!"), "HELLO THERE, FRIEND!");
    }

    #[test]
    fn test_current_year_is_four_digits() {
        let year = current_year();
        assert!((1000..=9999).contains(&year));
        assert_eq!(year, Local::now().year());
    }

    #[test]
    fn test_scream_it_helper() {
        let mut registry = Handlebars::new();
        register(&mut registry);

        let out = registry
            .render_template(r#"{{screamIt "hello"}}"#, &json!({}))
            .unwrap();
        assert_eq!(out, "HELLO");

        let out = registry
            .render_template("{{screamIt greeting}}", &json!({ "greeting": "hi" }))
            .unwrap();
        assert_eq!(out, "HI");
    }

    #[test]
    fn test_get_current_year_helper() {
        let mut registry = Handlebars::new();
        register(&mut registry);

        let out = registry
            .render_template("{{getCurrentYear}}", &json!({}))
            .unwrap();
        assert_eq!(out, current_year().to_string());
    }

    #[test]
    fn test_scream_it_without_argument_errors() {
        let mut registry = Handlebars::new();
        register(&mut registry);

        assert!(registry.render_template("{{screamIt}}", &json!({})).is_err());
    }
}
