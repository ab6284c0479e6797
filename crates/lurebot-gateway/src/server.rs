// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the webhook endpoint.

use std::sync::Arc;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use lurebot_agent::Engine;
use lurebot_core::LurebotError;

use crate::auth::{AuthConfig, auth_middleware};
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Request orchestrator handling the full engagement flow.
    pub engine: Arc<Engine>,
    /// Service name reported by the health endpoint.
    pub service_name: String,
}

/// Gateway server configuration (mirrors `GatewayConfig` from lurebot-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Bearer token for auth (`None` = reject all protected requests).
    pub bearer_token: Option<String>,
}

/// Build the gateway router.
///
/// - `GET /health` is public (for liveness probes).
/// - `POST /webhook` requires bearer auth (fail-closed when unset).
pub fn build_router(state: GatewayState, auth: AuthConfig) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/webhook", post(handlers::post_webhook))
        .route_layer(axum_middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the gateway HTTP server and serve until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), LurebotError> {
    let auth = AuthConfig {
        bearer_token: config.bearer_token.clone(),
    };
    let app = build_router(state, auth);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| LurebotError::Channel {
                message: format!("failed to bind gateway to {addr}: {e}"),
                source: Some(Box::new(e)),
            })?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| LurebotError::Channel {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
