// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scam classification capability trait.

use async_trait::async_trait;

use crate::error::LurebotError;
use crate::types::Classification;

/// External text-classification capability.
///
/// Implementations must fail closed: a malformed or partially valid
/// response is an `Err`, not a half-trusted `Classification`. Callers
/// combine a successful verdict with the local heuristics and silently
/// fall back to heuristic-only scoring on any error.
#[async_trait]
pub trait ScamClassifier: Send + Sync {
    /// Short identifier for logging (e.g., "anthropic", "mock-classifier").
    fn name(&self) -> &str;

    /// Classifies the given conversation text as scam-like or not.
    async fn classify(&self, text: &str) -> Result<Classification, LurebotError>;
}
