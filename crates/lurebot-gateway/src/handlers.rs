// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! Handles POST /webhook and GET /health.

use axum::{Json, extract::State};
use serde::Serialize;

use lurebot_agent::{WebhookRequest, WebhookResponse};

use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Configured service name.
    pub service: String,
    /// Binary version.
    pub version: String,
}

/// POST /webhook
///
/// Runs the full engagement flow for one inbound message. The engine is
/// total: every well-formed request gets a well-formed response, even
/// when all external capabilities are down.
pub async fn post_webhook(
    State(state): State<GatewayState>,
    Json(request): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    Json(state.engine.handle(request).await)
}

/// GET /health
///
/// Unauthenticated liveness probe.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            service: "lurebot".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"service\":\"lurebot\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
    }
}
