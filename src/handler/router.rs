//! Route matching and dispatch module
//!
//! Routes are matched in registration order and the first match wins.
//! Requests no route matches, whatever their method, fall through to the
//! 404 fallback naming the original URL.

use std::collections::HashMap;
use std::sync::OnceLock;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::handler::routes;
use crate::http;

/// Per-request view handed to route handlers.
pub struct RouteRequest<'a> {
    /// Values captured by `{param}` pattern segments, verbatim from the path.
    pub params: HashMap<&'static str, String>,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
    /// Path plus query string exactly as received.
    pub original_url: &'a str,
}

impl RouteRequest<'_> {
    /// Captured path parameter. The pattern guarantees presence before
    /// dispatch, so a miss only happens on a handler/pattern mismatch.
    pub fn param(&self, name: &str) -> &str {
        self.params.get(name).map_or("", String::as_str)
    }

    /// Query parameter, or the literal token `undefined` when absent.
    /// Missing optional names render as "undefined" in the body; that
    /// behavior is part of the contract, not an accident to fix.
    pub fn query_or_undefined(&self, name: &str) -> &str {
        self.query.get(name).map_or("undefined", String::as_str)
    }
}

type Handler = fn(&RouteRequest) -> Response<Full<Bytes>>;

/// One registered (method, path pattern) → handler entry.
struct Route {
    method: Method,
    pattern: RoutePattern,
    handler: Handler,
}

/// Path pattern made of literal segments and named `{param}` segments.
struct RoutePattern {
    segments: Vec<Segment>,
}

enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

impl RoutePattern {
    fn parse(pattern: &'static str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.strip_prefix('{')
                    .and_then(|inner| inner.strip_suffix('}'))
                    .map_or(Segment::Literal(s), Segment::Param)
            })
            .collect();
        Self { segments }
    }

    /// Match a request path segment by segment, capturing `{param}` values.
    /// A trailing slash is ignored; a `{param}` never spans segments.
    fn matches(&self, path: &str) -> Option<HashMap<&'static str, String>> {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(*name, (*part).to_string());
                }
            }
        }
        Some(params)
    }
}

fn get(pattern: &'static str, handler: Handler) -> Route {
    Route {
        method: Method::GET,
        pattern: RoutePattern::parse(pattern),
        handler,
    }
}

/// The route table, in registration order.
fn route_table() -> &'static [Route] {
    static ROUTES: OnceLock<Vec<Route>> = OnceLock::new();
    ROUTES.get_or_init(|| {
        vec![
            get("/", routes::index),
            get("/hello", routes::hello),
            get("/big", routes::big),
            get("/json", routes::json),
            get("/greeting/{id}", routes::greeting),
            get("/yo/{buddy}", routes::yo),
            get("/fancy", routes::fancy),
            get("/fortune", routes::fortune),
            get("/appleproduct", routes::appleproduct),
        ]
    })
}

/// Main entry point for request handling: first matching route wins,
/// otherwise the 404 fallback.
pub fn handle_request<B>(req: &Request<B>) -> Response<Full<Bytes>> {
    let path = req.uri().path();
    let original_url = req
        .uri()
        .path_and_query()
        .map_or(path, hyper::http::uri::PathAndQuery::as_str);

    for route in route_table() {
        if route.method != *req.method() {
            continue;
        }
        if let Some(params) = route.pattern.matches(path) {
            let request = RouteRequest {
                params,
                query: http::parse_query(req.uri().query()),
                original_url,
            };
            return (route.handler)(&request);
        }
    }

    http::build_not_found_response(original_url)
}
