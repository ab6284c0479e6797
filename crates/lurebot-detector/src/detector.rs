// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scam-likelihood detection combining heuristics with an optional
//! external classifier.
//!
//! The classifier is advisory: any failure (timeout, malformed response,
//! unavailability) silently degrades to heuristic-only output. Detection
//! never returns an error to the caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use lurebot_core::{Classification, DetectionResult, HistoryEntry, Phase, ScamClassifier};

use crate::heuristics::{has_account_hint, score_text};

/// Scam-likelihood detector.
///
/// Thresholds come from configuration; the classifier is optional and its
/// calls are bounded by `timeout`.
pub struct Detector {
    scam_threshold: f64,
    harvest_hint_threshold: f64,
    classifier: Option<Arc<dyn ScamClassifier>>,
    timeout: Duration,
}

impl Detector {
    /// Create a heuristic-only detector.
    pub fn new(scam_threshold: f64, harvest_hint_threshold: f64) -> Self {
        Self {
            scam_threshold,
            harvest_hint_threshold,
            classifier: None,
            timeout: Duration::from_secs(8),
        }
    }

    /// Attach an external classifier with a per-call timeout budget.
    pub fn with_classifier(mut self, classifier: Arc<dyn ScamClassifier>, timeout: Duration) -> Self {
        self.classifier = Some(classifier);
        self.timeout = timeout;
        self
    }

    /// Score the latest message in the context of the full conversation.
    ///
    /// The heuristic pass runs over all prior history text concatenated
    /// with the new message. The external classifier (if configured) sees
    /// the same text; its verdict is OR-combined with the heuristic one
    /// and the higher confidence wins.
    pub async fn detect(&self, message: &str, history: &[HistoryEntry]) -> DetectionResult {
        let all_text = history
            .iter()
            .map(|h| h.message.as_str())
            .chain(std::iter::once(message))
            .collect::<Vec<_>>()
            .join(" ");

        let (score, signals) = score_text(&all_text);
        let external = self.classify_external(&all_text).await;

        let (scam_detected, confidence, phase_hint, reasoning) = match external {
            Some(c) => {
                let scam_detected = c.is_scam || score >= self.scam_threshold;
                let confidence = c.confidence.max(score);
                let phase_hint = match c.phase_hint {
                    Some(hint @ (Phase::Hook | Phase::Harvest)) => hint,
                    _ if has_account_hint(&signals) => Phase::Harvest,
                    _ => Phase::Hook,
                };
                let reasoning = format!(
                    "LLM: {}; Heuristic signals: {}",
                    c.reason,
                    join_or_none(&signals)
                );
                (scam_detected, confidence, phase_hint, reasoning)
            }
            None => {
                let scam_detected = score >= self.scam_threshold;
                let phase_hint =
                    if score >= self.harvest_hint_threshold || has_account_hint(&signals) {
                        Phase::Harvest
                    } else {
                        Phase::Hook
                    };
                let reasoning = format!("Signals: {}", join_or_none(&signals));
                (scam_detected, score, phase_hint, reasoning)
            }
        };

        DetectionResult {
            scam_detected,
            confidence: round2(confidence),
            reasoning,
            phase_hint: if scam_detected { phase_hint } else { Phase::NotScam },
            signals,
        }
    }

    /// Run the external classifier within the timeout budget.
    ///
    /// Returns `None` on any failure; the error is logged and swallowed.
    async fn classify_external(&self, text: &str) -> Option<Classification> {
        let classifier = self.classifier.as_ref()?;

        match tokio::time::timeout(self.timeout, classifier.classify(text)).await {
            Ok(Ok(classification)) => Some(classification),
            Ok(Err(e)) => {
                debug!(classifier = classifier.name(), error = %e, "external classification failed, using heuristics");
                None
            }
            Err(_) => {
                debug!(
                    classifier = classifier.name(),
                    timeout_secs = self.timeout.as_secs(),
                    "external classification timed out, using heuristics"
                );
                None
            }
        }
    }
}

fn join_or_none(signals: &[String]) -> String {
    if signals.is_empty() {
        "none".to_string()
    } else {
        signals.join(", ")
    }
}

/// Two-decimal precision for reported confidences.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
