//! HTTP protocol layer module
//!
//! Response builders, query-string parsing and the security-header layer,
//! decoupled from the route handlers themselves.

pub mod query;
pub mod response;
pub mod security;

// Re-export commonly used functions
pub use query::parse_query;
pub use response::{build_html_response, build_not_found_response, build_text_response};
