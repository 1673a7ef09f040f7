// Connection handling
// Serves one accepted TCP stream on a spawned task.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve a single connection in a spawned task.
///
/// Connection-level errors are logged and never propagate; a broken client
/// must not take the serve loop down.
pub fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                handler::handle_request(req, state)
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
