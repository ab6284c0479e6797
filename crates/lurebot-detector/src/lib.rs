// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scam-likelihood detection for the lurebot decoy agent.
//!
//! Deterministic heuristic scoring over conversation text, optionally
//! combined with an external classification capability. The external
//! path is strictly advisory: every failure mode degrades to the
//! heuristic verdict without surfacing an error.

pub mod detector;
pub mod heuristics;

pub use detector::Detector;
pub use heuristics::{ACCOUNT_HINTS, SCAM_KEYWORDS, URGENCY_PHRASES, score_text};
