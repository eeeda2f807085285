use train_booking::config::ServerConfig;
use train_booking::graph::sample_network;
use train_booking::listing::sample_catalogue;
use train_booking::web::{AppState, create_router};

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServerConfig::from_env();

    // Seed with the demonstration network and catalogue
    let graph = sample_network();
    let catalogue = sample_catalogue()?;
    info!(
        stations = graph.station_count(),
        routes = graph.edge_count(),
        trains = catalogue.len(),
        "network loaded"
    );

    let state = AppState::new(graph, catalogue);
    let app = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "train booking service listening");
    info!("  GET  /health           - Health check");
    info!("  POST /plan_route       - Plan a route");
    info!("  POST /book_ticket      - Queue a booking request");
    info!("  POST /admission/drain  - Admit queued requests");
    info!("  GET  /trains           - List trains by departure");
    info!("  POST /routes           - Add a route");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
