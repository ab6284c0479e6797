// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./lurebot.toml` > `~/.config/lurebot/lurebot.toml` > `/etc/lurebot/lurebot.toml`
//! with environment variable overrides via `LUREBOT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::LurebotConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lurebot/lurebot.toml` (system-wide)
/// 3. `~/.config/lurebot/lurebot.toml` (user XDG config)
/// 4. `./lurebot.toml` (local directory)
/// 5. `LUREBOT_*` environment variables
pub fn load_config() -> Result<LurebotConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config file specification.
pub fn load_config_from_str(toml_content: &str) -> Result<LurebotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LurebotConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LurebotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LurebotConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(LurebotConfig::default()))
        .merge(Toml::file("/etc/lurebot/lurebot.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("lurebot/lurebot.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("lurebot.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `LUREBOT_GATEWAY_BEARER_TOKEN`
/// must map to `gateway.bearer_token`, not `gateway.bearer.token`.
fn env_provider() -> Env {
    Env::prefixed("LUREBOT_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: LUREBOT_DETECTION_SCAM_THRESHOLD -> "detection_scam_threshold"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("detection_", "detection.", 1)
            .replacen("state_", "state.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}
