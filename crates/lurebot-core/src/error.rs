// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the lurebot decoy agent.

use thiserror::Error;

/// The primary error type used across lurebot crates.
///
/// Capability errors (`Provider`, `Timeout`) are always recovered locally
/// by the detector/reply fallback paths; they never reach the webhook
/// caller.
#[derive(Debug, Error)]
pub enum LurebotError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// External capability errors (API failure, malformed response, model not found).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Transport errors (bind failure, server error).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
