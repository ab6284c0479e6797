// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock scam classifier with pre-configured verdicts.
//!
//! Verdicts are popped from a FIFO queue. When the queue is empty, the
//! classifier reports unavailability, exercising the heuristic fallback.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use lurebot_core::{Classification, LurebotError, ScamClassifier};

/// A mock classification capability that returns queued verdicts.
pub struct MockClassifier {
    verdicts: Arc<Mutex<VecDeque<Classification>>>,
}

impl MockClassifier {
    /// Create a mock classifier with an empty verdict queue (always fails).
    pub fn new() -> Self {
        Self {
            verdicts: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a mock classifier pre-loaded with the given verdicts.
    pub fn with_verdicts(verdicts: Vec<Classification>) -> Self {
        Self {
            verdicts: Arc::new(Mutex::new(VecDeque::from(verdicts))),
        }
    }

    /// Add a verdict to the end of the queue.
    pub async fn add_verdict(&self, verdict: Classification) {
        self.verdicts.lock().await.push_back(verdict);
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScamClassifier for MockClassifier {
    fn name(&self) -> &str {
        "mock-classifier"
    }

    async fn classify(&self, _text: &str) -> Result<Classification, LurebotError> {
        self.verdicts
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| LurebotError::Provider {
                message: "mock classifier queue exhausted".into(),
                source: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lurebot_core::Phase;

    #[tokio::test]
    async fn queued_verdicts_returned_in_order() {
        let classifier = MockClassifier::with_verdicts(vec![
            Classification {
                is_scam: true,
                confidence: 0.9,
                reason: "first".into(),
                phase_hint: Some(Phase::Hook),
            },
            Classification {
                is_scam: false,
                confidence: 0.1,
                reason: "second".into(),
                phase_hint: None,
            },
        ]);

        assert_eq!(classifier.classify("x").await.unwrap().reason, "first");
        assert_eq!(classifier.classify("x").await.unwrap().reason, "second");
        // Queue exhausted: reports unavailability.
        assert!(classifier.classify("x").await.is_err());
    }

    #[tokio::test]
    async fn empty_queue_always_errors() {
        let classifier = MockClassifier::new();
        assert!(classifier.classify("x").await.is_err());
    }
}
