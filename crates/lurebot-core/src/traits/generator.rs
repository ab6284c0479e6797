// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text generation capability trait.

use async_trait::async_trait;

use crate::error::LurebotError;

/// External text-generation capability used for persona replies.
///
/// The caller supplies a fully rendered system prompt and user prompt;
/// the adapter only transports them. Any error means "use the template
/// fallback" and must never surface to the webhook caller.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short identifier for logging (e.g., "anthropic", "mock-generator").
    fn name(&self) -> &str;

    /// Generates a reply for the given prompts.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, LurebotError>;
}
