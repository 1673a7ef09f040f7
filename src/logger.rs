// Console logging helpers
// Human-readable output only; startup banner, access lines, and errors.

use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("======================================");
    println!("Serving {}", root.display());
    println!("Listening on: http://{addr}");
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

/// One line per handled request, common-log style with a local timestamp.
pub fn log_access(method: &hyper::Method, path: &str, status: u16, body_bytes: usize) {
    println!(
        "[{}] \"{} {}\" {} {}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        path,
        status,
        body_bytes
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown() {
    println!("\nShutting down server");
}
