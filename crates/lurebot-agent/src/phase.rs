// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engagement phase state machine.

use lurebot_core::{DetectionResult, Phase};

/// Select the next engagement phase.
///
/// Total over its inputs; rules are evaluated in order:
/// 1. Not scam -> `NotScam` (non-sticky: reverts even from `Harvest`)
/// 2. Prior phase `Harvest` -> stay (absorbing)
/// 3. Detection hints `Harvest` -> jump there regardless of turn count
/// 4. First engaged turn -> `Hook`
/// 5. Second engaged turn -> `Probe`
/// 6. Otherwise -> `Harvest`
pub fn select_phase(detection: &DetectionResult, prior_phase: Phase, turns: usize) -> Phase {
    if !detection.scam_detected {
        return Phase::NotScam;
    }
    if prior_phase == Phase::Harvest {
        return Phase::Harvest;
    }
    if detection.phase_hint == Phase::Harvest {
        return Phase::Harvest;
    }
    match turns {
        0 => Phase::Hook,
        1 => Phase::Probe,
        _ => Phase::Harvest,
    }
}
