// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude capability adapter for the lurebot decoy agent.
//!
//! Implements both capability traits over the Messages API: strict-JSON
//! scam classification and persona reply generation. Responses that
//! violate the classifier's expected schema are rejected wholesale (fail
//! closed) so the caller falls back to heuristics rather than partially
//! trusting malformed fields.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use lurebot_config::LurebotConfig;
use lurebot_core::{Classification, LurebotError, Phase, ScamClassifier, TextGenerator};

use crate::client::AnthropicClient;
use crate::types::{ApiMessage, MessageRequest};

/// System prompt for the classifier call. The reply must be the strict
/// JSON object and nothing else.
const CLASSIFIER_PROMPT: &str = "Classify if the message is part of a scam attempt. \
Reply ONLY with strict JSON: \
{\"scam\": true|false, \"confidence\": 0-1, \"phase\": \"HOOK|HARVEST|NONE\", \"reason\": \"<short>\"}";

const CLASSIFIER_TEMPERATURE: f64 = 0.1;
const REPLY_TEMPERATURE: f64 = 0.55;

/// Anthropic-backed implementation of both lurebot capabilities.
///
/// API key resolution order: config -> `ANTHROPIC_API_KEY` env var -> error.
pub struct AnthropicCapability {
    client: AnthropicClient,
    classifier_model: String,
    reply_model: String,
    max_tokens: u32,
}

impl AnthropicCapability {
    /// Creates the capability adapter from the given configuration.
    pub fn new(config: &LurebotConfig) -> Result<Self, LurebotError> {
        let api_key = resolve_api_key(&config.anthropic.api_key)?;
        let client = AnthropicClient::new(
            api_key,
            config.anthropic.api_version.clone(),
            Duration::from_secs(config.anthropic.timeout_secs),
        )?;

        info!(
            classifier_model = config.anthropic.classifier_model,
            reply_model = config.anthropic.reply_model,
            "Anthropic capability initialized"
        );

        Ok(Self {
            client,
            classifier_model: config.anthropic.classifier_model.clone(),
            reply_model: config.anthropic.reply_model.clone(),
            max_tokens: config.anthropic.max_tokens,
        })
    }

    #[cfg(test)]
    fn with_client(client: AnthropicClient) -> Self {
        Self {
            client,
            classifier_model: "claude-haiku-4-5-20250901".into(),
            reply_model: "claude-sonnet-4-20250514".into(),
            max_tokens: 256,
        }
    }
}

#[async_trait]
impl ScamClassifier for AnthropicCapability {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn classify(&self, text: &str) -> Result<Classification, LurebotError> {
        let request = MessageRequest {
            model: self.classifier_model.clone(),
            messages: vec![ApiMessage {
                role: "user".into(),
                content: text.to_string(),
            }],
            system: Some(CLASSIFIER_PROMPT.to_string()),
            max_tokens: self.max_tokens,
            temperature: Some(CLASSIFIER_TEMPERATURE),
        };

        let response = self.client.complete_message(&request).await?;
        parse_classification(&response.text())
    }
}

#[async_trait]
impl TextGenerator for AnthropicCapability {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LurebotError> {
        let request = MessageRequest {
            model: self.reply_model.clone(),
            messages: vec![ApiMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
            system: Some(system.to_string()),
            max_tokens: self.max_tokens,
            temperature: Some(REPLY_TEMPERATURE),
        };

        let response = self.client.complete_message(&request).await?;
        Ok(response.text())
    }
}

/// Expected classifier output schema. All fields are required; anything
/// missing or mistyped fails the whole classification.
#[derive(Debug, Deserialize)]
struct RawClassification {
    scam: bool,
    confidence: f64,
    phase: String,
    reason: String,
}

/// Parse the classifier's strict-JSON verdict, failing closed.
///
/// Tolerates markdown code fences and surrounding prose around the JSON
/// object (transport noise), but rejects any schema violation: missing
/// fields, wrong types, or an out-of-range confidence.
fn parse_classification(response: &str) -> Result<Classification, LurebotError> {
    let json_str = isolate_json_object(response).ok_or_else(|| LurebotError::Provider {
        message: "classifier response contains no JSON object".into(),
        source: None,
    })?;

    let raw: RawClassification =
        serde_json::from_str(json_str).map_err(|e| LurebotError::Provider {
            message: format!("classifier response violates schema: {e}"),
            source: Some(Box::new(e)),
        })?;

    if !(0.0..=1.0).contains(&raw.confidence) {
        return Err(LurebotError::Provider {
            message: format!("classifier confidence out of range: {}", raw.confidence),
            source: None,
        });
    }

    let phase_hint = match raw.phase.as_str() {
        "HOOK" => Some(Phase::Hook),
        "HARVEST" => Some(Phase::Harvest),
        _ => None,
    };

    Ok(Classification {
        is_scam: raw.scam,
        confidence: raw.confidence,
        reason: raw.reason,
        phase_hint,
    })
}

/// Slice out the first `{` .. last `}` span of the response.
fn isolate_json_object(response: &str) -> Option<&str> {
    let trimmed = response.trim();
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&trimmed[start..=end])
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, LurebotError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
        LurebotError::Config(
            "Anthropic API key not found. Set anthropic.api_key in config or ANTHROPIC_API_KEY environment variable.".into(),
        )
    })
}
