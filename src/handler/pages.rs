//! Page handlers
//!
//! Each handler builds a template context and renders a named view; `/bad`
//! returns a fixed JSON payload instead.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde_json::json;

use crate::http;
use crate::logger;
use crate::templates::Renderer;

pub fn home(renderer: &Renderer) -> Response<Full<Bytes>> {
    render_page(
        renderer,
        "home",
        json!({
            "pageTitle": "Home Page",
            "welcomeMessage": "Hello there, friend!",
        }),
    )
}

pub fn about(renderer: &Renderer) -> Response<Full<Bytes>> {
    render_page(renderer, "about", json!({ "pageTitle": "About Page" }))
}

pub fn projects(renderer: &Renderer) -> Response<Full<Bytes>> {
    render_page(renderer, "projects", json!({ "pageTitle": "Projects Page" }))
}

/// Fixed error payload endpoint.
pub fn bad(_renderer: &Renderer) -> Response<Full<Bytes>> {
    http::build_json_response(&json!({
        "errorMessage": "Unable to fulfill this request.",
    }))
}

/// Render a named view against a context.
///
/// A render failure (unknown template, broken partial) is logged and
/// answered with a plain 500; the site has no fancier error page.
fn render_page(
    renderer: &Renderer,
    name: &str,
    context: serde_json::Value,
) -> Response<Full<Bytes>> {
    match renderer.render(name, &context) {
        Ok(html) => http::build_html_response(html),
        Err(e) => {
            logger::log_error(&format!("Failed to render template '{name}': {e}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn renderer() -> Renderer {
        Renderer::new("views", "views/partials").expect("views directories present")
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_page() {
        let resp = home(&renderer());
        assert_eq!(resp.status(), 200);

        let body = body_string(resp).await;
        assert!(body.contains("Home Page"));
        assert!(body.contains("Hello there, friend!"));
    }

    #[tokio::test]
    async fn test_about_page() {
        let resp = about(&renderer());
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).await.contains("About Page"));
    }

    #[tokio::test]
    async fn test_projects_page() {
        let resp = projects(&renderer());
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).await.contains("Projects Page"));
    }

    #[tokio::test]
    async fn test_bad_payload() {
        let resp = bad(&renderer());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/json");

        let body = body_string(resp).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["errorMessage"], "Unable to fulfill this request.");
    }

    #[test]
    fn test_unknown_template_is_500() {
        let resp = render_page(&renderer(), "no-such-view", json!({}));
        assert_eq!(resp.status(), 500);
    }
}
