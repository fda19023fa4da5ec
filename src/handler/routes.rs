//! Route table module
//!
//! A fixed, ordered set of `(method, path)` pairs bound to
//! response-producing functions. The table is built once at startup and
//! never changes afterwards.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

use crate::handler::pages;
use crate::templates::Renderer;

/// A response-producing function bound to a route.
pub type PageHandler = fn(&Renderer) -> Response<Full<Bytes>>;

/// A registered route: method, exact path, handler.
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub handler: PageHandler,
}

/// Ordered route table, fixed after startup.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Register the site's routes.
    pub fn new() -> Self {
        Self {
            routes: vec![
                Route {
                    method: Method::GET,
                    path: "/",
                    handler: pages::home,
                },
                Route {
                    method: Method::GET,
                    path: "/about",
                    handler: pages::about,
                },
                Route {
                    method: Method::GET,
                    path: "/projects",
                    handler: pages::projects,
                },
                Route {
                    method: Method::GET,
                    path: "/bad",
                    handler: pages::bad,
                },
            ],
        }
    }

    /// Find the first route whose method and path match exactly.
    ///
    /// HEAD requests match GET routes; the caller strips the body.
    pub fn find(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.path == path && method_matches(&route.method, method))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

fn method_matches(registered: &Method, requested: &Method) -> bool {
    registered == requested || (*registered == Method::GET && *requested == Method::HEAD)
}
