// Connection handling module
// Accepts TCP connections and serves each over HTTP/1.1.

use std::convert::Infallible;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::config::Config;
use crate::handler;
use crate::http::security;
use crate::logger;

/// Accept connections forever, serving each on a spawned local task.
///
/// Runs until the process is externally terminated; accept errors are
/// logged and the loop continues.
pub async fn run_accept_loop(
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if config.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                serve_connection(stream, Arc::clone(&config));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single connection in a spawned task.
///
/// Every response passes through the security-header layer after the
/// router has produced it, independent of which route matched.
fn serve_connection(stream: TcpStream, config: Arc<Config>) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move {
                    if config.logging.access_log {
                        logger::log_request(req.method(), req.uri());
                    }
                    let mut response = handler::handle_request(&req);
                    security::apply_security_headers(response.headers_mut());
                    Ok::<_, Infallible>(response)
                }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
