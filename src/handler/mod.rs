//! Request handler module
//!
//! The route table, the route handlers and the constant catalogs the
//! random-pick routes draw from.

pub mod catalog;
pub mod router;
pub mod routes;

// Re-export main entry point
pub use router::handle_request;
