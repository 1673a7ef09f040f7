// Server module entry point
// Listener setup, per-connection serving, and shutdown signaling.

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module file keeps the short name on disk
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::bind_listener;
pub use server_loop::run_server_loop;
pub use signal::ShutdownSignal;
