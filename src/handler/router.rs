//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every request is logged first,
//! then matched against the route table, then against the public asset
//! directory, and finally answered with 404.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let target = req.uri().to_string();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    // Logging happens before any routing decision and never fails the
    // request.
    logger::log_request(&method, &target);

    let response = route_request(&method, &path, &state).await;

    Ok(if is_head {
        strip_body(response)
    } else {
        response
    })
}

/// Dispatch a request: registered routes, then static assets, then 404.
async fn route_request(method: &Method, path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    // 1. Registered routes (exact match)
    if let Some(route) = state.routes.find(method, path) {
        return (route.handler)(&state.renderer);
    }

    // 2. Static assets under the public root (GET/HEAD only)
    if matches!(*method, Method::GET | Method::HEAD) {
        if let Some(response) = static_files::try_serve(path, &state.config.paths.public).await {
            return response;
        }
    }

    // 3. Fallthrough
    http::build_404_response()
}

/// Drop the body of a response while keeping status and headers.
///
/// HEAD answers carry the same Content-Length the GET answer would.
fn strip_body(response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Full::new(Bytes::new()))
}
