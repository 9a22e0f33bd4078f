use clap::Parser;
use condo_proxy::server::{self, state::AppState};
use condo_proxy::utils::{logger, validation::Validate};
use condo_proxy::{AppConfig, ServeOpts};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let opts = ServeOpts::parse();
    logger::init_server_logger(opts.verbose);

    tracing::info!("Starting condo-proxy");

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Some(port) = opts.port {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if opts.verbose {
        tracing::debug!("Upstream base URL: {}", config.upstream_base_url);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::new(config)?);
    let app = server::router(state);

    tracing::info!("🚀 Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
