// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the lurebot workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Author of a conversation history entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// The external counterparty (the suspected scammer).
    User,
    /// The decoy agent.
    Agent,
}

/// One immutable entry in a conversation transcript.
///
/// History is append-only; insertion order is conversation chronology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub message: String,
}

impl HistoryEntry {
    pub fn new(role: Role, message: impl Into<String>) -> Self {
        Self {
            role,
            message: message.into(),
        }
    }
}

/// Engagement-strategy state governing reply tactics.
///
/// `Screen` is the placeholder a conversation starts in before the first
/// detection pass has run; the phase selector never returns it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Not yet classified -- initial state only.
    Screen,
    /// Latest detection did not score as scam.
    NotScam,
    /// First engaged turn: express interest, keep them talking.
    Hook,
    /// Second engaged turn: clarify payment channel and amount.
    Probe,
    /// Terminal engaged state: ask for payment/identity artifacts.
    Harvest,
}

/// Result of running the scam-likelihood detector over one inbound message.
///
/// Produced fresh per message; never persisted beyond the response.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// Final verdict after combining heuristics with the optional classifier.
    pub scam_detected: bool,
    /// Confidence in [0, 1], reported at two-decimal precision.
    pub confidence: f64,
    /// Human-readable trace of which signals fired.
    pub reasoning: String,
    /// Suggested engagement phase; forced to `NotScam` when the verdict is negative.
    pub phase_hint: Phase,
    /// Names of matched signals, in check order.
    pub signals: Vec<String>,
}

/// Verdict returned by an external classification capability.
#[derive(Debug, Clone)]
pub struct Classification {
    pub is_scam: bool,
    /// Confidence in [0, 1] as reported by the capability.
    pub confidence: f64,
    /// Short free-text rationale.
    pub reason: String,
    /// `Some(Hook)` / `Some(Harvest)` when the capability committed to a
    /// phase, `None` for anything else it returned.
    pub phase_hint: Option<Phase>,
}

/// A single extracted artifact with its extraction-time confidence tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelItem {
    pub value: String,
    pub confidence: f64,
    /// Routing code cross-linked onto a bank account, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifsc: Option<String>,
}

impl IntelItem {
    pub fn new(value: impl Into<String>, confidence: f64) -> Self {
        Self {
            value: value.into(),
            confidence,
            ifsc: None,
        }
    }
}

/// Payment/identity intelligence harvested from conversation text.
///
/// Within a conversation this grows monotonically: values are only ever
/// added (deduplicated by exact string match), never removed or rescored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedIntel {
    pub bank_accounts: Vec<IntelItem>,
    pub upi_ids: Vec<IntelItem>,
    pub urls: Vec<IntelItem>,
    pub amounts: Vec<IntelItem>,
}

impl ExtractedIntel {
    /// Merge `new` into `self`, keeping only values not already present
    /// in the corresponding list. First-seen confidence and ifsc tags win.
    pub fn merge(&mut self, new: ExtractedIntel) {
        merge_items(&mut self.bank_accounts, new.bank_accounts);
        merge_items(&mut self.upi_ids, new.upi_ids);
        merge_items(&mut self.urls, new.urls);
        merge_items(&mut self.amounts, new.amounts);
    }

    /// True when no artifact of any kind has been collected.
    pub fn is_empty(&self) -> bool {
        self.bank_accounts.is_empty()
            && self.upi_ids.is_empty()
            && self.urls.is_empty()
            && self.amounts.is_empty()
    }
}

fn merge_items(existing: &mut Vec<IntelItem>, new: Vec<IntelItem>) {
    for item in new {
        if !existing.iter().any(|e| e.value == item.value) {
            existing.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Phase::NotScam).unwrap(), "\"NOT_SCAM\"");
        assert_eq!(serde_json::to_string(&Phase::Screen).unwrap(), "\"SCREEN\"");
        assert_eq!(serde_json::to_string(&Phase::Harvest).unwrap(), "\"HARVEST\"");
    }

    #[test]
    fn phase_display_round_trips() {
        use std::str::FromStr;

        for phase in [
            Phase::Screen,
            Phase::NotScam,
            Phase::Hook,
            Phase::Probe,
            Phase::Harvest,
        ] {
            let s = phase.to_string();
            assert_eq!(Phase::from_str(&s).unwrap(), phase);
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"agent\"");
    }

    #[test]
    fn history_entry_deserializes_from_wire_shape() {
        let entry: HistoryEntry =
            serde_json::from_str(r#"{"role": "user", "message": "hello"}"#).unwrap();
        assert_eq!(entry.role, Role::User);
        assert_eq!(entry.message, "hello");
    }

    #[test]
    fn intel_item_omits_missing_ifsc() {
        let item = IntelItem::new("pay@bank", 0.8);
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("ifsc"));

        let mut tagged = IntelItem::new("12345678", 0.78);
        tagged.ifsc = Some("HDFC0001234".into());
        let json = serde_json::to_string(&tagged).unwrap();
        assert!(json.contains("\"ifsc\":\"HDFC0001234\""));
    }

    #[test]
    fn merge_dedups_by_value() {
        let mut intel = ExtractedIntel::default();
        intel.upi_ids.push(IntelItem::new("pay@bank", 0.8));

        let mut new = ExtractedIntel::default();
        new.upi_ids.push(IntelItem::new("pay@bank", 0.8));
        new.upi_ids.push(IntelItem::new("other@bank", 0.8));

        intel.merge(new);
        assert_eq!(intel.upi_ids.len(), 2);
        assert_eq!(intel.upi_ids[0].value, "pay@bank");
        assert_eq!(intel.upi_ids[1].value, "other@bank");
    }

    #[test]
    fn merge_keeps_first_seen_tags() {
        let mut intel = ExtractedIntel::default();
        let mut first = IntelItem::new("123456789012", 0.78);
        first.ifsc = Some("HDFC0001234".into());
        intel.bank_accounts.push(first);

        let mut new = ExtractedIntel::default();
        let mut second = IntelItem::new("123456789012", 0.78);
        second.ifsc = Some("ICIC0004321".into());
        new.bank_accounts.push(second);

        intel.merge(new);
        assert_eq!(intel.bank_accounts.len(), 1);
        assert_eq!(intel.bank_accounts[0].ifsc.as_deref(), Some("HDFC0001234"));
    }

    #[test]
    fn empty_intel_reports_empty() {
        let mut intel = ExtractedIntel::default();
        assert!(intel.is_empty());
        intel.amounts.push(IntelItem::new("inr 5000", 0.4));
        assert!(!intel.is_empty());
    }
}
