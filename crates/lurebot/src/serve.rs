// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lurebot serve` command implementation.
//!
//! Wires the conversation store, detector, and replier into the request
//! engine and serves the webhook gateway. The Anthropic capability is
//! optional at every level: if it is disabled or cannot be initialized,
//! the service runs heuristic detection and template replies.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use lurebot_agent::{Engine, Replier};
use lurebot_anthropic::AnthropicCapability;
use lurebot_config::LurebotConfig;
use lurebot_core::LurebotError;
use lurebot_detector::Detector;
use lurebot_gateway::{GatewayState, ServerConfig, start_server};
use lurebot_state::ConversationStore;

/// Runs the `lurebot serve` command.
pub async fn run_serve(config: LurebotConfig) -> Result<(), LurebotError> {
    init_tracing(&config.agent.log_level);

    info!("starting lurebot serve");

    if config.gateway.bearer_token.is_none() {
        warn!("gateway.bearer_token is not set -- all webhook requests will be rejected");
    }

    let store = Arc::new(ConversationStore::new(config.state.ttl_secs));

    let mut detector = Detector::new(
        config.detection.scam_threshold,
        config.detection.harvest_hint_threshold,
    );
    let mut replier = Replier::new();

    if config.anthropic.enabled {
        // Capability init failure is not fatal: the engine degrades to
        // heuristics and templates, matching the per-request fallback.
        match AnthropicCapability::new(&config) {
            Ok(capability) => {
                let capability = Arc::new(capability);
                let timeout = Duration::from_secs(config.anthropic.timeout_secs);
                detector = detector.with_classifier(capability.clone(), timeout);
                replier = replier.with_generator(capability, timeout);
                info!("Anthropic classifier and reply generator enabled");
            }
            Err(e) => {
                warn!(error = %e, "Anthropic capability unavailable, running heuristic-only");
            }
        }
    } else {
        info!("external capabilities disabled by configuration; using heuristics and templates");
    }

    let engine = Arc::new(Engine::new(
        store,
        detector,
        replier,
        config.agent.max_turns,
    ));

    let state = GatewayState {
        engine,
        service_name: config.agent.name.clone(),
    };
    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
        bearer_token: config.gateway.bearer_token.clone(),
    };

    start_server(&server_config, state).await
}

/// Print the resolved configuration with secrets redacted.
pub fn print_config(config: &LurebotConfig) {
    println!("agent.name = {}", config.agent.name);
    println!("agent.log_level = {}", config.agent.log_level);
    println!("agent.max_turns = {}", config.agent.max_turns);
    println!(
        "detection.scam_threshold = {}",
        config.detection.scam_threshold
    );
    println!(
        "detection.harvest_hint_threshold = {}",
        config.detection.harvest_hint_threshold
    );
    println!("state.ttl_secs = {}", config.state.ttl_secs);
    println!("anthropic.enabled = {}", config.anthropic.enabled);
    println!(
        "anthropic.api_key = {}",
        redacted(config.anthropic.api_key.as_deref())
    );
    println!(
        "anthropic.classifier_model = {}",
        config.anthropic.classifier_model
    );
    println!("anthropic.reply_model = {}", config.anthropic.reply_model);
    println!("anthropic.timeout_secs = {}", config.anthropic.timeout_secs);
    println!("gateway.host = {}", config.gateway.host);
    println!("gateway.port = {}", config.gateway.port);
    println!(
        "gateway.bearer_token = {}",
        redacted(config.gateway.bearer_token.as_deref())
    );
}

fn redacted(value: Option<&str>) -> &'static str {
    match value {
        Some(_) => "[redacted]",
        None => "(unset)",
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lurebot={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_never_leaks_values() {
        assert_eq!(redacted(Some("sk-ant-secret")), "[redacted]");
        assert_eq!(redacted(None), "(unset)");
    }
}
