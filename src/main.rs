use std::sync::Arc;

mod browser;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let root = cfg.resolve_root()?;
    let addr = cfg.socket_addr()?;

    // Bind failure (port taken, permission denied) is fatal here
    let listener = server::bind_listener(addr)?;

    logger::log_server_start(&addr, &root);

    let shutdown = server::ShutdownSignal::new();
    server::signal::start_signal_handler(shutdown.clone());

    if cfg.server.open_browser {
        browser::open_in_browser(&cfg.root_url());
    }

    let state = Arc::new(config::AppState::new(cfg, root));
    server::run_server_loop(listener, state, shutdown).await;

    Ok(())
}
