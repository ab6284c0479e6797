// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sharded in-memory conversation store.
//!
//! The map itself is a `DashMap` so unrelated conversations never contend;
//! each entry carries its own async mutex which a request holds for the
//! whole read-modify-write sequence, serializing concurrent webhooks for
//! the same conversation id. The map lock is never held across an await.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use lurebot_core::HistoryEntry;

use crate::conversation::ConversationState;

/// Handle to one conversation's state. Lock it for the duration of a
/// request's mutation sequence.
pub type ConversationHandle = Arc<Mutex<ConversationState>>;

/// Keyed store of per-conversation state with opportunistic TTL eviction.
pub struct ConversationStore {
    conversations: DashMap<String, ConversationHandle>,
    /// TTL in seconds; zero or negative disables eviction.
    ttl_secs: i64,
}

impl ConversationStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            conversations: DashMap::new(),
            ttl_secs,
        }
    }

    /// Fetch or create the state for `conversation_id`.
    ///
    /// Runs an eviction sweep first, so a conversation idle past the TTL
    /// is replaced by a fresh state rather than resumed. `seed_history`
    /// is only applied when the conversation is brand new.
    pub fn get_or_create(
        &self,
        conversation_id: &str,
        seed_history: Vec<HistoryEntry>,
    ) -> ConversationHandle {
        self.sweep();

        self.conversations
            .entry(conversation_id.to_string())
            .or_insert_with(|| {
                let mut state = ConversationState::new(conversation_id);
                state.history = seed_history;
                Arc::new(Mutex::new(state))
            })
            .clone()
    }

    /// Best-effort TTL cleanup to keep memory bounded.
    ///
    /// An entry whose mutex is currently held belongs to an in-flight
    /// request and is skipped; it will be re-examined on a later sweep.
    pub fn sweep(&self) {
        if self.ttl_secs <= 0 {
            return;
        }
        let ttl = Duration::from_secs(self.ttl_secs as u64);

        let before = self.conversations.len();
        self.conversations.retain(|_, handle| match handle.try_lock() {
            Ok(state) => state.last_seen.elapsed() <= ttl,
            Err(_) => true,
        });

        let evicted = before - self.conversations.len();
        if evicted > 0 {
            debug!(evicted, remaining = self.conversations.len(), "evicted idle conversations");
        }
    }

    /// Number of live conversations.
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
