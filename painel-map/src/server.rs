//! Axum server for the map page.

use crate::config::MapConfig;
use crate::page::render_page;
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared state for all handlers. The page is rendered once up front since
/// the configuration never changes while serving.
#[derive(Clone)]
struct AppState {
    page: Arc<str>,
}

/// Build the router for `config`. Fails if the configuration is invalid.
pub fn router(config: &MapConfig) -> Result<Router> {
    config.validate()?;
    let page = render_page(config)?;

    let state = AppState {
        page: Arc::from(page),
    };

    Ok(Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .fallback(handle_not_found)
        .with_state(state))
}

/// Serve the map page on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, config: &MapConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if !config.has_access_token() {
        warn!("No map access token configured; tile requests will be rejected by the provider");
    }

    let app = router(config)?;
    let addr = listener.local_addr()?;
    info!("Map scaffold listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Map server failed")?;

    info!("Map server stopped");
    Ok(())
}

/// Bind `host:port`. `host` may be an IP literal or a name such as
/// `localhost`, which is resolved before binding.
pub async fn bind_listener(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn run_map_server(host: &str, port: u16, config: MapConfig) -> Result<()> {
    let listener = bind_listener(host, port).await?;

    serve(listener, &config, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
        }
    })
    .await
}

/// GET / — the map page
async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

/// GET /health — liveness probe
async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
