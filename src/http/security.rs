//! Security response headers
//!
//! A fixed header set applied to every outgoing response by the connection
//! layer, independent of which route produced it. The route handlers never
//! inspect or alter these.

use hyper::header::{HeaderMap, HeaderName, HeaderValue};

const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-xss-protection", "0"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("referrer-policy", "no-referrer"),
    ("x-permitted-cross-domain-policies", "none"),
];

/// Set the security headers on `headers`, overwriting any existing values.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
