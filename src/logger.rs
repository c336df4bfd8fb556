//! Logger module
//!
//! Logging utilities for the HTTP server: startup banner, access lines
//! with local timestamps, warning and error output.

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("App listening at http://{addr}/");
    println!("Environment: {}", config.environment);
    println!();
    println!("Try going to different URIs:");
    println!();
    println!("  Try /hello");
    println!("  Try /big");
    println!("  Try /json");
    println!("  Try /fortune");
    println!("  Try /greeting/yourname");
    println!("  Try /yo/Dr.Rogers");
    println!("  Try /fancy/?first=Denise&last=Case");
    println!("  Try /appleproduct");
    println!();
    println!("Hit CTRL-C to stop");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!(
        "[{}] {method} {uri}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
