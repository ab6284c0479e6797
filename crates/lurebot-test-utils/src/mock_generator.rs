// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock text generator with pre-configured replies.
//!
//! Replies are popped from a FIFO queue. When the queue is empty, the
//! generator reports unavailability, exercising the template fallback.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use lurebot_core::{LurebotError, TextGenerator};

/// A mock text-generation capability that returns queued replies.
pub struct MockGenerator {
    replies: Arc<Mutex<VecDeque<String>>>,
    /// Prompts seen by the generator, for assertions on prompt content.
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock generator with an empty reply queue (always fails).
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock generator pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, text: String) {
        self.replies.lock().await.push_back(text);
    }

    /// All user prompts this generator has been called with.
    pub async fn seen_prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock-generator"
    }

    async fn generate(&self, _system: &str, prompt: &str) -> Result<String, LurebotError> {
        self.prompts.lock().await.push(prompt.to_string());
        self.replies
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| LurebotError::Provider {
                message: "mock generator queue exhausted".into(),
                source: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queued_replies_returned_in_order() {
        let generator =
            MockGenerator::with_replies(vec!["first".to_string(), "second".to_string()]);

        assert_eq!(generator.generate("sys", "p1").await.unwrap(), "first");
        assert_eq!(generator.generate("sys", "p2").await.unwrap(), "second");
        assert!(generator.generate("sys", "p3").await.is_err());
    }

    #[tokio::test]
    async fn prompts_are_recorded() {
        let generator = MockGenerator::with_replies(vec!["ok".to_string()]);
        generator.generate("sys", "what is needed?").await.unwrap();

        let prompts = generator.seen_prompts().await;
        assert_eq!(prompts, vec!["what is needed?"]);
    }
}
