use clap::Args;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::{build_router, AppState};
use crate::config::validation::ConfigValidator;
use crate::error::Result;
use crate::services::ServiceFactory;

#[derive(Args)]
pub struct ServeArgs {
    /// Listen address, e.g. 0.0.0.0:8080 (defaults to bind_address from config)
    #[arg(short, long)]
    bind: Option<String>,
}

pub async fn execute(args: ServeArgs, services: &ServiceFactory) -> Result<()> {
    let bind = args
        .bind
        .unwrap_or_else(|| services.config().bind_address.clone());
    ConfigValidator::validate_socket_addr(&bind, "bind address")?;

    let search = services.create_search_service()?;
    let app = build_router(AppState::new(search));

    let listener = TcpListener::bind(&bind).await?;
    info!("Karaoke search API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested, draining connections"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
