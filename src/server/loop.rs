// Serve loop
// Accepts connections until the shutdown handle fires.
//
// Lifecycle: the listener is already bound when the loop starts (Listening);
// a shutdown trigger moves it to ShuttingDown, after which no new
// connections are accepted and the loop returns (Stopped). There is no
// restart or reconfiguration path.

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use super::signal::ShutdownSignal;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until shutdown is requested.
///
/// Accept errors are logged and the loop keeps going; only the shutdown
/// handle ends it. The shutdown message is printed exactly once, here.
pub async fn run_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: ShutdownSignal,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.wait() => {
                logger::log_shutdown();
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;
    use crate::server::bind_listener;
    use std::fs as std_fs;
    use std::time::Duration;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    struct TestServer {
        _dir: TempDir,
        addr: std::net::SocketAddr,
        shutdown: ShutdownSignal,
        task: tokio::task::JoinHandle<()>,
    }

    async fn start_server() -> TestServer {
        let dir = TempDir::new().unwrap();
        std_fs::write(dir.path().join("index.html"), b"<h1>it works</h1>").unwrap();
        let root = dir.path().canonicalize().unwrap();
        let config = test_config(root.to_str().unwrap());
        let state = Arc::new(AppState::new(config, root));

        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = ShutdownSignal::new();
        let task = tokio::spawn(run_server_loop(listener, state, shutdown.clone()));

        TestServer {
            _dir: dir,
            addr,
            shutdown,
            task,
        }
    }

    async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_end_to_end_get_index() {
        let server = start_server().await;

        let response = raw_request(
            server.addr,
            "GET /index.html HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
        let lower = response.to_lowercase();
        assert!(lower.contains("cache-control: no-cache, no-store, must-revalidate"));
        assert!(lower.contains("pragma: no-cache"));
        assert!(lower.contains("expires: 0"));
        assert!(response.ends_with("<h1>it works</h1>"));

        server.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), server.task)
            .await
            .expect("loop should stop after shutdown")
            .unwrap();
    }

    #[tokio::test]
    async fn test_not_found_still_carries_no_cache_headers() {
        let server = start_server().await;

        let response = raw_request(
            server.addr,
            "GET /missing HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 404"), "got: {response}");
        let lower = response.to_lowercase();
        assert!(lower.contains("cache-control: no-cache, no-store, must-revalidate"));
        assert!(lower.contains("expires: 0"));

        server.shutdown.trigger();
        let _ = tokio::time::timeout(Duration::from_secs(1), server.task).await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_accepting() {
        let server = start_server().await;

        server.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), server.task)
            .await
            .expect("loop should stop after shutdown")
            .unwrap();

        // Listener is dropped once the loop returns
        assert!(TcpStream::connect(server.addr).await.is_err());
    }
}
