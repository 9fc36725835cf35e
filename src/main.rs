use anyhow::Context;
use clap::Parser;
use order_webhook::lifecycle::{setup_tracing, AppConfig, OrderSystem};
use order_webhook::webhook;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = AppConfig::parse();
    info!(?config, "Starting order webhook");

    let system = OrderSystem::new(&config).context("failed to start order system")?;

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    webhook::serve(listener, system.stores(), shutdown_signal())
        .await
        .context("server terminated with error")?;

    system.shutdown().await?;
    info!("Order webhook stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, shutting down"),
        Err(e) => {
            error!(error = %e, "Cannot listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
