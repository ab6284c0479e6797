// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine construction helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use lurebot_agent::{Engine, Replier};
use lurebot_core::{ScamClassifier, TextGenerator};
use lurebot_detector::Detector;
use lurebot_state::ConversationStore;

/// Knobs for building a test engine. Defaults mirror the shipped
/// configuration defaults, with no external capabilities attached.
pub struct EngineOptions {
    pub max_turns: usize,
    pub ttl_secs: i64,
    pub scam_threshold: f64,
    pub harvest_hint_threshold: f64,
    pub capability_timeout: Duration,
    pub classifier: Option<Arc<dyn ScamClassifier>>,
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_turns: 16,
            ttl_secs: 7200,
            scam_threshold: 0.35,
            harvest_hint_threshold: 0.55,
            capability_timeout: Duration::from_secs(1),
            classifier: None,
            generator: None,
        }
    }
}

/// Build an engine after applying `customize` to the default options.
pub fn engine_with(customize: impl FnOnce(&mut EngineOptions)) -> Engine {
    let mut options = EngineOptions::default();
    customize(&mut options);

    let store = Arc::new(ConversationStore::new(options.ttl_secs));

    let mut detector = Detector::new(options.scam_threshold, options.harvest_hint_threshold);
    if let Some(classifier) = options.classifier {
        detector = detector.with_classifier(classifier, options.capability_timeout);
    }

    let mut replier = Replier::new();
    if let Some(generator) = options.generator {
        replier = replier.with_generator(generator, options.capability_timeout);
    }

    Engine::new(store, detector, replier, options.max_turns)
}

/// Heuristic-only engine with template replies and default thresholds.
pub fn template_engine() -> Engine {
    engine_with(|_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    use lurebot_agent::WebhookRequest;

    #[tokio::test]
    async fn template_engine_answers_without_capabilities() {
        let engine = template_engine();
        let resp = engine
            .handle(WebhookRequest {
                conversation_id: "harness".into(),
                message_id: None,
                message: "hello".into(),
                history: Vec::new(),
                metadata: None,
            })
            .await;
        assert_eq!(resp.scam_detected, Some(false));
        assert!(!resp.reply.is_empty());
    }
}
