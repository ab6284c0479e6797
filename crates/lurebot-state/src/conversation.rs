// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-conversation mutable state.

use std::collections::HashSet;
use std::time::Instant;

use lurebot_core::{ExtractedIntel, HistoryEntry, Phase, Role};

/// The central mutable entity for one conversation, keyed by the opaque
/// `conversation_id` supplied by the caller.
///
/// History is append-only and extracted intelligence grows monotonically;
/// the whole state is only ever removed wholesale by TTL eviction.
#[derive(Debug)]
pub struct ConversationState {
    pub conversation_id: String,
    /// Current engagement phase; starts at the `Screen` placeholder and
    /// transitions only via the phase selector.
    pub phase: Phase,
    pub history: Vec<HistoryEntry>,
    pub extracted: ExtractedIntel,
    /// Instant of the most recent append; drives TTL eviction.
    pub last_seen: Instant,
    /// Caller-supplied message identifiers already handled.
    pub processed_message_ids: HashSet<String>,
}

impl ConversationState {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            phase: Phase::Screen,
            history: Vec::new(),
            extracted: ExtractedIntel::default(),
            last_seen: Instant::now(),
            processed_message_ids: HashSet::new(),
        }
    }

    /// Append one history entry and refresh the eviction clock.
    pub fn append(&mut self, role: Role, message: impl Into<String>) {
        self.history.push(HistoryEntry::new(role, message));
        self.last_seen = Instant::now();
    }

    /// Engagement depth: the number of agent-authored replies.
    ///
    /// Computed from history on every access rather than stored, so it
    /// can never drift from the transcript.
    pub fn turns(&self) -> usize {
        self.history.iter().filter(|h| h.role == Role::Agent).count()
    }

    /// Merge newly extracted intelligence, deduplicating by exact value.
    pub fn merge_extracted(&mut self, new: ExtractedIntel) {
        self.extracted.merge(new);
    }

    /// True when this message identifier has been handled before.
    pub fn is_processed(&self, message_id: &str) -> bool {
        self.processed_message_ids.contains(message_id)
    }

    /// Record a message identifier as handled.
    pub fn mark_processed(&mut self, message_id: impl Into<String>) {
        self.processed_message_ids.insert(message_id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lurebot_core::IntelItem;

    #[test]
    fn new_state_starts_in_screen_phase() {
        let state = ConversationState::new("conv-1");
        assert_eq!(state.phase, Phase::Screen);
        assert!(state.history.is_empty());
        assert_eq!(state.turns(), 0);
    }

    #[test]
    fn turns_counts_agent_entries_only() {
        let mut state = ConversationState::new("conv-1");
        state.append(Role::User, "hi");
        state.append(Role::Agent, "hello");
        state.append(Role::User, "pay me");
        state.append(Role::Agent, "how?");
        assert_eq!(state.turns(), 2);
    }

    #[test]
    fn append_refreshes_last_seen() {
        let mut state = ConversationState::new("conv-1");
        let before = state.last_seen;
        state.append(Role::User, "hi");
        assert!(state.last_seen >= before);
    }

    #[test]
    fn merge_extracted_dedups_across_calls() {
        let mut state = ConversationState::new("conv-1");

        let mut first = ExtractedIntel::default();
        first.upi_ids.push(IntelItem::new("pay@bank", 0.8));
        state.merge_extracted(first);

        let mut second = ExtractedIntel::default();
        second.upi_ids.push(IntelItem::new("pay@bank", 0.8));
        state.merge_extracted(second);

        assert_eq!(state.extracted.upi_ids.len(), 1);
    }

    #[test]
    fn processed_message_ids_round_trip() {
        let mut state = ConversationState::new("conv-1");
        assert!(!state.is_processed("msg-1"));
        state.mark_processed("msg-1");
        assert!(state.is_processed("msg-1"));
        assert!(!state.is_processed("msg-2"));
    }
}
