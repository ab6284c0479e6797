// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP webhook gateway for the lurebot decoy agent.
//!
//! One authenticated endpoint (`POST /webhook`) carries the whole
//! contract with the relay platform; `GET /health` is public for
//! liveness probes. Transport-level concerns (auth, malformed bodies)
//! are rejected here and never reach the engine.

pub mod auth;
pub mod handlers;
pub mod server;

pub use auth::AuthConfig;
pub use server::{GatewayState, ServerConfig, build_router, start_server};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use lurebot_test_utils::template_engine;

    use crate::auth::AuthConfig;
    use crate::server::{GatewayState, build_router};

    fn router(bearer_token: Option<&str>) -> axum::Router {
        let state = GatewayState {
            engine: Arc::new(template_engine()),
            service_name: "lurebot-test".to_string(),
        };
        let auth = AuthConfig {
            bearer_token: bearer_token.map(str::to_string),
        };
        build_router(state, auth)
    }

    fn webhook_request(token: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/webhook")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = router(Some("token"))
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "lurebot-test");
    }

    #[tokio::test]
    async fn webhook_without_token_is_rejected() {
        let response = router(Some("token"))
            .oneshot(webhook_request(
                None,
                r#"{"conversation_id": "c1", "message": "hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn webhook_with_wrong_token_is_rejected() {
        let response = router(Some("token"))
            .oneshot(webhook_request(
                Some("not-the-token"),
                r#"{"conversation_id": "c1", "message": "hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_auth_config_fails_closed() {
        let response = router(None)
            .oneshot(webhook_request(
                Some("anything"),
                r#"{"conversation_id": "c1", "message": "hi"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn webhook_round_trip_returns_contract_fields() {
        let response = router(Some("token"))
            .oneshot(webhook_request(
                Some("token"),
                r#"{"conversation_id": "c1", "message": "urgent kyc verification fee otp today"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["conversation_id"], "c1");
        assert_eq!(json["scam_detected"], true);
        assert_eq!(json["phase"], "HOOK");
        assert!(json["reply"].as_str().is_some_and(|r| !r.is_empty()));
        assert!(json["extracted"]["bank_accounts"].is_array());
        assert_eq!(json["engagement"]["turns"], 1);
        assert!(json["signals"].as_array().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn malformed_body_is_a_client_error() {
        let response = router(Some("token"))
            .oneshot(webhook_request(Some("token"), r#"{"message": 42}"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = router(Some("token"))
            .oneshot(
                Request::builder()
                    .uri("/v1/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
