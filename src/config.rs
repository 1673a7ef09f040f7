// Configuration module
// All values are established once at startup and held for the process lifetime.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub serving: ServingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServingConfig {
    pub root: String,
    pub index_files: Vec<String>,
    pub directory_listing: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration from `devserve.toml` (optional) and `DEVSERVE_*`
    /// environment variables, falling back to built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("devserve").required(false))
            .add_source(config::Environment::with_prefix("DEVSERVE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.open_browser", true)?
            .set_default("serving.root", ".")?
            .set_default(
                "serving.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .set_default("serving.directory_listing", true)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }

    /// Resolve the serving root to an absolute canonical path.
    /// A root that does not exist or cannot be read is a startup failure.
    pub fn resolve_root(&self) -> std::io::Result<PathBuf> {
        Path::new(&self.serving.root).canonicalize()
    }

    /// The URL the browser is pointed at on startup.
    pub fn root_url(&self) -> String {
        format!("http://{}:{}/", self.server.host, self.server.port)
    }
}

/// Shared request-time state: the immutable config plus the serving root
/// resolved once at startup.
pub struct AppState {
    pub config: Config,
    pub root: PathBuf,
}

impl AppState {
    pub const fn new(config: Config, root: PathBuf) -> Self {
        Self { config, root }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Config fixture used by handler and server tests.
    pub(crate) fn test_config(root: &str) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                open_browser: false,
                workers: None,
            },
            serving: ServingConfig {
                root: root.to_string(),
                index_files: vec!["index.html".to_string(), "index.htm".to_string()],
                directory_listing: true,
            },
            logging: LoggingConfig { access_log: false },
        }
    }

    #[test]
    fn test_socket_addr() {
        let cfg = test_config(".");
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_root_url() {
        let cfg = test_config(".");
        assert_eq!(cfg.root_url(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn test_resolve_missing_root_fails() {
        let cfg = test_config("/nonexistent/devserve-test-root");
        assert!(cfg.resolve_root().is_err());
    }
}
