// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the lurebot decoy agent.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level lurebot configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LurebotConfig {
    /// Agent identity and engagement limits.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Heuristic detection thresholds.
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Conversation state store settings.
    #[serde(default)]
    pub state: StateConfig,

    /// Anthropic API settings for the optional classifier/generator.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Webhook gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Agent identity and engagement-limit configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the service, reported by the health endpoint.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Hard cap on agent replies per conversation; further calls get the
    /// fixed stalling response without touching detector or generator.
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            max_turns: default_max_turns(),
        }
    }
}

fn default_agent_name() -> String {
    "lurebot".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_turns() -> usize {
    16
}

/// Heuristic detection thresholds, centralised for easy tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DetectionConfig {
    /// Heuristic score at or above which a message counts as scam-like.
    #[serde(default = "default_scam_threshold")]
    pub scam_threshold: f64,

    /// Heuristic score at or above which the phase hint escalates to HARVEST.
    #[serde(default = "default_harvest_hint_threshold")]
    pub harvest_hint_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            scam_threshold: default_scam_threshold(),
            harvest_hint_threshold: default_harvest_hint_threshold(),
        }
    }
}

fn default_scam_threshold() -> f64 {
    0.35
}

fn default_harvest_hint_threshold() -> f64 {
    0.55
}

/// Conversation state store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StateConfig {
    /// TTL for in-memory conversation state, in seconds.
    /// Zero or negative disables eviction entirely.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: i64,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> i64 {
    7200
}

/// Anthropic API configuration for the optional external capabilities.
///
/// When `enabled` is false (the default) the service runs heuristic-only
/// detection and template replies; no network calls are made.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// Enable the external classifier and reply generator.
    #[serde(default)]
    pub enabled: bool,

    /// Anthropic API key. `None` falls back to the `ANTHROPIC_API_KEY`
    /// environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for scam classification.
    #[serde(default = "default_classifier_model")]
    pub classifier_model: String,

    /// Model used for persona reply generation.
    #[serde(default = "default_reply_model")]
    pub reply_model: String,

    /// Anthropic API version string.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Maximum tokens to generate per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-call timeout budget in seconds; on expiry the caller falls
    /// back to heuristics/templates.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            classifier_model: default_classifier_model(),
            reply_model: default_reply_model(),
            api_version: default_api_version(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_classifier_model() -> String {
    "claude-haiku-4-5-20250901".to_string()
}

fn default_reply_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_max_tokens() -> u32 {
    256
}

fn default_timeout_secs() -> u64 {
    8
}

/// Webhook gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bearer token for webhook auth. When unset, all authenticated
    /// routes are rejected (fail-closed).
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            bearer_token: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}
