// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-request orchestration: the webhook contract.
//!
//! One [`Engine::handle`] call covers the whole flow: load/create state,
//! guard max-turns, guard duplicate message, append the inbound message,
//! detect, select phase, generate the reply, and merge extracted
//! intelligence. Every path returns a well-formed response; there is no
//! fatal error inside the engine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lurebot_core::{ExtractedIntel, HistoryEntry, Phase, Role};
use lurebot_detector::Detector;
use lurebot_intel::extract_intel;
use lurebot_state::ConversationStore;

use crate::phase::select_phase;
use crate::reply::Replier;

/// Fixed stalling reply once a conversation hits the turn cap.
const STALL_REPLY: &str = "Okay, I'll check and get back to you shortly.";

/// Inbound webhook payload from the relay platform.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    /// Opaque conversation key.
    pub conversation_id: String,
    /// Optional opaque message identifier enabling idempotency.
    #[serde(default)]
    pub message_id: Option<String>,
    /// Latest inbound message text.
    pub message: String,
    /// Prior transcript, used only to seed a brand-new conversation.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Free-form relay metadata; accepted and ignored.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Webhook response with the reply and structured signals.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub conversation_id: String,
    /// `null` when the request was suppressed as a duplicate.
    pub scam_detected: Option<bool>,
    pub confidence: f64,
    pub phase: Phase,
    /// Empty when no reply was produced (duplicate suppression).
    pub reply: String,
    /// Snapshot of everything harvested so far in this conversation.
    pub extracted: ExtractedIntel,
    pub engagement: EngagementSummary,
    pub reasoning: String,
    pub signals: Vec<String>,
}

/// Engagement-depth summary included in every response.
#[derive(Debug, Clone, Serialize)]
pub struct EngagementSummary {
    pub turns: usize,
    pub last_user_msg: String,
    pub last_agent_msg: String,
}

/// Request orchestrator tying the store, detector, and replier together.
pub struct Engine {
    store: Arc<ConversationStore>,
    detector: Detector,
    replier: Replier,
    max_turns: usize,
}

impl Engine {
    pub fn new(
        store: Arc<ConversationStore>,
        detector: Detector,
        replier: Replier,
        max_turns: usize,
    ) -> Self {
        Self {
            store,
            detector,
            replier,
            max_turns,
        }
    }

    /// Process one webhook call.
    ///
    /// The per-conversation mutex is held for the full mutation sequence,
    /// so concurrent requests for the same id cannot interleave appends
    /// or double-count turns. The global map is released before any
    /// external capability call; detection and generation run against a
    /// cloned history snapshot.
    pub async fn handle(&self, req: WebhookRequest) -> WebhookResponse {
        let handle = self
            .store
            .get_or_create(&req.conversation_id, req.history.clone());
        let mut state = handle.lock().await;

        // Guardrail: stop after max turns to avoid runaway loops.
        if state.turns() >= self.max_turns {
            info!(
                conversation_id = %req.conversation_id,
                turns = state.turns(),
                "max turns reached, stalling"
            );
            return WebhookResponse {
                conversation_id: req.conversation_id,
                scam_detected: Some(true),
                confidence: 1.0,
                phase: state.phase,
                reply: STALL_REPLY.to_string(),
                extracted: state.extracted.clone(),
                engagement: EngagementSummary {
                    turns: state.turns(),
                    last_user_msg: req.message,
                    last_agent_msg: String::new(),
                },
                reasoning: "Max turns reached".to_string(),
                signals: Vec::new(),
            };
        }

        // Idempotency: suppress duplicate message events entirely.
        if let Some(ref message_id) = req.message_id {
            if state.is_processed(message_id) {
                debug!(
                    conversation_id = %req.conversation_id,
                    message_id = %message_id,
                    "duplicate message_id, suppressing"
                );
                return WebhookResponse {
                    conversation_id: req.conversation_id,
                    scam_detected: None,
                    confidence: 0.0,
                    phase: state.phase,
                    reply: String::new(),
                    extracted: state.extracted.clone(),
                    engagement: EngagementSummary {
                        turns: state.turns(),
                        last_user_msg: String::new(),
                        last_agent_msg: String::new(),
                    },
                    reasoning: "Duplicate message_id ignored".to_string(),
                    signals: Vec::new(),
                };
            }
            state.mark_processed(message_id.clone());
        }

        state.append(Role::User, req.message.clone());
        let history = state.history.clone();

        let detection = self.detector.detect(&req.message, &history).await;
        let phase = select_phase(&detection, state.phase, state.turns());
        state.phase = phase;

        let reply = self.replier.generate(&req.message, &history, phase).await;
        state.append(Role::Agent, reply.clone());

        state.merge_extracted(extract_intel(&req.message));

        debug!(
            conversation_id = %req.conversation_id,
            phase = %phase,
            confidence = detection.confidence,
            turns = state.turns(),
            "webhook handled"
        );

        WebhookResponse {
            conversation_id: req.conversation_id,
            scam_detected: Some(detection.scam_detected),
            confidence: detection.confidence,
            phase,
            reply: reply.clone(),
            extracted: state.extracted.clone(),
            engagement: EngagementSummary {
                turns: state.turns(),
                last_user_msg: req.message,
                last_agent_msg: reply,
            },
            reasoning: detection.reasoning,
            signals: detection.signals,
        }
    }
}
