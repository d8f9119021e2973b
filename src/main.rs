use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use position_history::config::Config;
use position_history::server::router;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!(error=%e, "could not load configuration");
            std::process::exit(1);
        }
    };
    let bind = config.service.bind.clone();
    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error=%e, %bind, "could not bind");
            std::process::exit(1);
        }
    };
    info!(%bind, acting = %config.acting_designation, "position history service listening");
    if let Err(e) = axum::serve(listener, router(config)).await {
        error!(error=%e, "server stopped");
    }
}
