use crate::auth::ApiKeyAuth;
use crate::config::OpusConfig;
use crate::mcp::dto::{McpRequest, McpResponse, INTERNAL_ERROR, UNAUTHORIZED};
use crate::mcp::handler;
use crate::OpusServer;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    server: Arc<OpusServer>,
    auth: ApiKeyAuth,
}

async fn handle_rpc(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<McpRequest>,
) -> Response {
    if !state.auth.authorize(&headers) {
        tracing::warn!("Rejected RPC call without a valid {} header", state.auth.header_name());
        let body = McpResponse::failure(req.id, UNAUTHORIZED, "Unauthorized");
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    let id = req.id.clone();
    let server = Arc::clone(&state.server);
    // Catalog lookups block; keep them off the async workers.
    match tokio::task::spawn_blocking(move || handler::handle_request(&server, req)).await {
        Ok(res) => Json(res).into_response(),
        Err(e) => {
            tracing::error!("RPC worker failed: {}", e);
            Json(McpResponse::failure(id, INTERNAL_ERROR, "Internal error")).into_response()
        }
    }
}

pub fn router(server: Arc<OpusServer>, auth: ApiKeyAuth) -> Router {
    Router::new()
        .route("/rpc", post(handle_rpc))
        .with_state(AppState { server, auth })
}

pub async fn run_http_server(server: Arc<OpusServer>, config: &OpusConfig) -> Result<()> {
    let auth = ApiKeyAuth::new(&config.auth);
    if auth.is_enabled() {
        tracing::info!("API key auth enabled via {} header", auth.header_name());
    }
    let app = router(server, auth);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Starting HTTP MCP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
