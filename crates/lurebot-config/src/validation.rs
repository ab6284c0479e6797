// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as threshold ranges and a usable bind address.

use crate::diagnostic::ConfigError;
use crate::model::LurebotConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &LurebotConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for (key, value) in [
        ("detection.scam_threshold", config.detection.scam_threshold),
        (
            "detection.harvest_hint_threshold",
            config.detection.harvest_hint_threshold,
        ),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be within [0.0, 1.0], got {value}"),
            });
        }
    }

    if config.agent.max_turns == 0 {
        errors.push(ConfigError::Validation {
            message: "agent.max_turns must be at least 1".to_string(),
        });
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let host = config.gateway.host.trim();
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.gateway.port == 0 {
        errors.push(ConfigError::Validation {
            message: "gateway.port must be nonzero".to_string(),
        });
    }

    if config.anthropic.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.timeout_secs must be positive".to_string(),
        });
    }

    if config.anthropic.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.max_tokens must be positive".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = LurebotConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn out_of_range_threshold_fails_validation() {
        let mut config = LurebotConfig::default();
        config.detection.scam_threshold = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("scam_threshold"))
        ));
    }

    #[test]
    fn zero_max_turns_fails_validation() {
        let mut config = LurebotConfig::default();
        config.agent.max_turns = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("max_turns"))
        ));
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut config = LurebotConfig::default();
        config.gateway.host = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("gateway.host"))
        ));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = LurebotConfig::default();
        config.anthropic.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("timeout_secs"))
        ));
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = LurebotConfig::default();
        config.gateway.host = "0.0.0.0".to_string();
        config.gateway.port = 9000;
        config.detection.scam_threshold = 0.5;
        config.agent.max_turns = 4;
        assert!(validate_config(&config).is_ok());
    }
}
