use std::sync::Arc;
use std::time::Duration;

use spa_dev_server::config::{self, Config};
use spa_dev_server::handler::SpaRouter;
use spa_dev_server::logger;
use spa_dev_server::server::{self, ConnectionSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Tokio runtime; worker count from config, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    let result = runtime.block_on(async_main(cfg));

    // In-flight requests are not drained
    runtime.shutdown_timeout(Duration::from_millis(500));
    result
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    let root = cfg.resolve_root(&config::executable_dir()?)?;
    let router = Arc::new(SpaRouter::new(&cfg, root)?);

    let listener = server::create_listener(cfg.socket_addr()?)?;
    // Handlers go in before the banner so an early Ctrl+C is caught
    let shutdown = server::ShutdownListener::register()?;
    logger::log_server_start(&listener.local_addr()?, &router, &cfg);

    server::run_server_loop(
        listener,
        router,
        ConnectionSettings::from(&cfg.performance),
        shutdown.recv(),
    )
    .await?;

    Ok(())
}
