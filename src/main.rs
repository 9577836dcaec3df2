use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use superstore::config::AppConfig;
use superstore::services::dashboard::Dashboard;
use superstore::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "superstore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!(
        orders = %config.orders_source,
        states = %config.states_source,
        "Loading dataset"
    );
    let dashboard = Dashboard::load(&config).await?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(host = %addr, "Starting Superstore dashboard server");

    let state = AppState {
        dashboard: Arc::new(dashboard),
        config,
    };
    let app = superstore::routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
