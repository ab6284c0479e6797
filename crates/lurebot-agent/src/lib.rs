// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engagement logic for the lurebot decoy agent.
//!
//! Three pieces: the pure phase state machine, reply generation with a
//! deterministic template fallback, and the request engine orchestrating
//! one webhook call end to end.

pub mod engine;
pub mod phase;
pub mod reply;

pub use engine::{EngagementSummary, Engine, WebhookRequest, WebhookResponse};
pub use phase::select_phase;
pub use reply::Replier;
