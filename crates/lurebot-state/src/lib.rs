// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory conversation state for the lurebot decoy agent.
//!
//! No persistence: state lives for the process lifetime, bounded by
//! TTL eviction. Duplicate-message suppression and intelligence merging
//! both live on the per-conversation state; the store only hands out
//! locked handles and garbage-collects idle entries.

pub mod conversation;
pub mod store;

pub use conversation::ConversationState;
pub use store::{ConversationHandle, ConversationStore};
