//! Route handlers
//!
//! Every handler is a pure formatter: read-only request data in, exactly one
//! response out. None touch shared mutable state or perform I/O.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::handler::catalog;
use crate::handler::router::RouteRequest;
use crate::http::{build_html_response, build_text_response};

const INDEX_PAGE: &str = "<body style=\"background-color: #7575DD\">\
<h1>Demo Web App</h1> <hr> <br> <br>\
Try going to different URIs by adding these at the end: <br> <br>\
/hello <br>\
/big <br>\
/json <br>\
/greeting/yourname <br>\
/yo/Dr.Rogers <br>\
/fortune <br>\
/fancy/?first=Kelsie&last=Dibben <br>\
/appleproduct <br>";

const FORTUNE_PROMPT: &str = "<h2>You wish to know the future?</h2>\
<p>Ask a question in the query string, e.g., \
http://localhost:3002/fortune?Will I become rich? <br/>\
<p>The Magic 8 Ball will answer!</p>";

/// `GET /` — index page listing every route.
pub fn index(_req: &RouteRequest) -> Response<Full<Bytes>> {
    build_html_response(INDEX_PAGE.to_string())
}

/// `GET /hello`
pub fn hello(_req: &RouteRequest) -> Response<Full<Bytes>> {
    build_text_response("Hello World!".to_string())
}

/// `GET /big`
pub fn big(_req: &RouteRequest) -> Response<Full<Bytes>> {
    build_html_response("<h1>Hello World!</h1>".to_string())
}

/// `GET /json` — a fixed literal, deliberately not serialized from a value.
pub fn json(_req: &RouteRequest) -> Response<Full<Bytes>> {
    build_text_response(r#"{"name" : "Nandini"}"#.to_string())
}

/// `GET /greeting/{id}`
pub fn greeting(req: &RouteRequest) -> Response<Full<Bytes>> {
    let id = req.param("id");
    build_text_response(format!("Hello! The id provided was {id}."))
}

/// `GET /yo/{buddy}`
pub fn yo(req: &RouteRequest) -> Response<Full<Bytes>> {
    let buddy = req.param("buddy");
    build_html_response(format!("<h1>Yo, {buddy}!</h1>"))
}

/// `GET /fancy?first=...&last=...` — missing names render as "undefined".
pub fn fancy(req: &RouteRequest) -> Response<Full<Bytes>> {
    let first = req.query_or_undefined("first");
    let last = req.query_or_undefined("last");
    build_text_response(format!("Hello {first} {last}!"))
}

/// `GET /fortune` — a Magic 8-Ball service. An empty query string gets the
/// instructions; any question gets a random answer.
pub fn fortune(req: &RouteRequest) -> Response<Full<Bytes>> {
    if req.query.is_empty() {
        build_html_response(FORTUNE_PROMPT.to_string())
    } else {
        build_html_response(format!(
            "The answer is ... wait for it ... {}",
            catalog::pick_fortune()
        ))
    }
}

/// `GET /appleproduct` — one random catalog entry per request.
pub fn appleproduct(_req: &RouteRequest) -> Response<Full<Bytes>> {
    build_text_response(format!("Apple Product: {}", catalog::pick_product()))
}
