use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ledger_server::ledger::ServerConfig;
use ledger_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ledger_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let state = AppState::new(config.ledger.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.addr,
        leg_minutes = config.ledger.leg_minutes,
        "reservation ledger listening"
    );
    info!("  POST /passengers                        - Register a passenger");
    info!("  POST /trains                            - Add a train");
    info!("  POST /tickets                           - Book a ticket");
    info!("  GET  /trains/:id/seats?from=&to=        - Seats free on a segment");
    info!("  GET  /trains/:id/boarding/:station      - Passengers boarding at a station");
    info!("  GET  /trains/:id/oldest                 - Oldest passenger on a train");
    info!("  GET  /stations/:station/trains?start=&end= - Trains arriving in a window");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }
    info!("shutting down");
}
