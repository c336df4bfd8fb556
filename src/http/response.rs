//! HTTP response building module
//!
//! Builders for the response shapes the routes produce: HTML, plain text
//! and the 404 page naming the unmatched URI.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response with an HTML body
pub fn build_html_response(content: String) -> Response<Full<Bytes>> {
    build_response(200, "text/html; charset=utf-8", content)
}

/// Build a 200 response with a plain-text body
pub fn build_text_response(content: String) -> Response<Full<Bytes>> {
    build_response(200, "text/plain; charset=utf-8", content)
}

/// Build the 404 Not Found response naming the unmatched URI
pub fn build_not_found_response(original_url: &str) -> Response<Full<Bytes>> {
    build_response(
        404,
        "text/plain; charset=utf-8",
        format!("status 404 - {original_url} was not found"),
    )
}

fn build_response(status: u16, content_type: &str, content: String) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_html_response() {
        let response = build_html_response("<h1>hi</h1>".to_string());
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(response.headers().get("Content-Length").unwrap(), "11");
        assert_eq!(body_string(response).await, "<h1>hi</h1>");
    }

    #[tokio::test]
    async fn test_text_response() {
        let response = build_text_response("plain".to_string());
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "plain");
    }

    #[tokio::test]
    async fn test_not_found_response_names_the_url() {
        let response = build_not_found_response("/xyz?a=1");
        assert_eq!(response.status(), 404);
        assert_eq!(
            body_string(response).await,
            "status 404 - /xyz?a=1 was not found"
        );
    }
}
