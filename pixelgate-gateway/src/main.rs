//! Gateway server binary.

use pixelgate_gateway::config::GatewayConfig;
use pixelgate_gateway::routes;
use pixelgate_gateway::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pixelgate_gateway=info,tower_http=info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;
    let app = routes::app(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        upstream = %config.upstream_url,
        model = %config.model,
        "pixelgate gateway listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
