pub mod handlers;
pub mod types;

use crate::{config::Config, runner::PythonRunner, Result};
use axum::{routing::post, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let runner = PythonRunner::new(config.script.clone());
    let app_state = handlers::AppState {
        runner: Arc::new(runner),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(app_state: handlers::AppState) -> Router {
    // The method router needs an explicit fallback: non-POST methods must
    // still produce the JSON error body, not axum's empty 405.
    Router::new()
        .route(
            "/",
            post(handlers::execute_script).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
