use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use busline_api::{app, AppState};
use busline_store::{app_config::Config, InMemoryTripRepository, LogBookingGateway};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "busline_api=debug,busline_store=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Busline API on port {}", config.server.port);

    let app_state = AppState::new(
        Arc::new(InMemoryTripRepository::with_sample_data()),
        Arc::new(LogBookingGateway::new()),
        config.business_rules.clone(),
    );

    busline_api::worker::start_basket_expiry_worker(
        app_state.baskets.clone(),
        config.business_rules.basket_ttl_seconds,
        config.business_rules.basket_sweep_seconds,
    );

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
