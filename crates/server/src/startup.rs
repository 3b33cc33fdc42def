use std::{future::Future, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::cars::CarStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the car store once; seeded with the example listing unless disabled.
pub fn build_state(cfg: &AppConfig) -> AppState {
    let store = if cfg.inventory.seed { CarStore::seeded() } else { CarStore::new() };
    AppState::new(Arc::new(store))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Bind the configured `host:port`; host names such as `localhost` are resolved.
pub async fn bind(cfg: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = cfg.server.bind_addr();
    TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg);
    let app = build_app(state);

    let listener = bind(&cfg).await?;
    let addr = listener.local_addr()?;
    info!(%addr, seeded = cfg.inventory.seed, "car inventory listening");

    serve(listener, app, ctrl_c()).await
}
