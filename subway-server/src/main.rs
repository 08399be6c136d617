use subway_server::config::ServerConfig;
use subway_server::network::NetworkSnapshot;
use subway_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();

    // Load the network snapshot (fail fast if unavailable)
    let snapshot = NetworkSnapshot::load(&config.network_path)
        .expect("Failed to load network snapshot");
    let (network, fares) = snapshot
        .into_parts()
        .expect("Network snapshot is inconsistent");
    info!(
        stations = network.station_count(),
        lines = network.line_count(),
        base_fare = fares.base_fare(),
        "Network ready"
    );

    let state = AppState::new(network, fares);
    let app = create_router(state);

    let addr = config.addr;
    info!("Subway path finder listening on http://{addr}");
    info!("  GET /health        - Health check");
    info!("  GET /paths         - Shortest path (?source=&target=&type=DISTANCE|DURATION)");
    info!("  GET /stations      - Registered stations");
    info!("  GET /lines/detail  - Lines with their stations");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
