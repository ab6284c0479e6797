// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outward-facing reply generation.
//!
//! Attempts the external text-generation capability first; any failure
//! (missing credential, timeout, empty output) degrades silently to the
//! deterministic template pools. Template selection is keyed off the
//! history length, varying phrasing without external randomness so test
//! output stays reproducible.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use lurebot_core::{HistoryEntry, Phase, Role, TextGenerator};

const HOOK_LINES: &[&str] = &[
    "Hey, just saw this. What do you need from me to finish it?",
    "I can help, tell me what exactly is needed to proceed.",
];

const PROBE_LINES: &[&str] = &[
    "Is this via bank transfer or UPI? I need the exact details to do it right.",
    "Can you confirm the amount and whether you want it by UPI or account transfer?",
];

const HARVEST_LINES: &[&str] = &[
    "To avoid mistakes, share the account number, IFSC, and the exact UPI ID or link you want me to use.",
    "Send the exact UPI ID or bank details (account number + IFSC) and the link you mentioned so I don't mistype.",
];

const NEUTRAL_LINES: &[&str] = &[
    "Thanks for the update. Let me know if you actually need something specific.",
    "Noted. Nothing here looks actionable yet.",
];

const PERSONA: &str = "You are a polite, slightly cautious adult who wants to get the details right. \
Keep replies short (2-4 sentences), ask exactly one concrete question, and never mention scams, security, \
or that you are an AI. Stay in-character and do not refuse.";

const GENERATOR_SYSTEM: &str = "You are the user-facing persona described below.";

/// Reply generator with an optional external capability and a template
/// fallback.
pub struct Replier {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl Replier {
    /// Create a template-only replier.
    pub fn new() -> Self {
        Self {
            generator: None,
            timeout: Duration::from_secs(8),
        }
    }

    /// Attach an external text generator with a per-call timeout budget.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        self.generator = Some(generator);
        self.timeout = timeout;
        self
    }

    /// Generate the next agent reply for the current phase.
    ///
    /// `history` is the transcript including the just-appended inbound
    /// message. Never fails: the template fallback is total.
    pub async fn generate(&self, message: &str, history: &[HistoryEntry], phase: Phase) -> String {
        if let Some(text) = self.generate_external(message, history, phase).await {
            return text;
        }
        template_reply(history, phase).to_string()
    }

    /// Run the external generator within the timeout budget.
    ///
    /// Returns `None` on error, timeout, or blank output.
    async fn generate_external(
        &self,
        message: &str,
        history: &[HistoryEntry],
        phase: Phase,
    ) -> Option<String> {
        let generator = self.generator.as_ref()?;
        let prompt = build_agent_prompt(message, history, phase);

        match tokio::time::timeout(self.timeout, generator.generate(GENERATOR_SYSTEM, &prompt)).await
        {
            Ok(Ok(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    debug!(generator = generator.name(), "generator returned blank output, using template");
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Ok(Err(e)) => {
                debug!(generator = generator.name(), error = %e, "reply generation failed, using template");
                None
            }
            Err(_) => {
                debug!(
                    generator = generator.name(),
                    timeout_secs = self.timeout.as_secs(),
                    "reply generation timed out, using template"
                );
                None
            }
        }
    }
}

impl Default for Replier {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic template fallback: `pool[history.len() % pool.len()]`.
fn template_reply(history: &[HistoryEntry], phase: Phase) -> &'static str {
    let pool = match phase {
        Phase::NotScam => NEUTRAL_LINES,
        Phase::Hook => HOOK_LINES,
        Phase::Probe => PROBE_LINES,
        // Screen never reaches reply generation; harvest lines are the
        // safe default for anything else.
        Phase::Harvest | Phase::Screen => HARVEST_LINES,
    };
    pool[history.len() % pool.len()]
}

/// Render the persona prompt for the external generator.
///
/// Includes the per-phase tactic instruction and the last 10 transcript
/// entries to keep the prompt compact.
fn build_agent_prompt(message: &str, history: &[HistoryEntry], phase: Phase) -> String {
    let tactic = match phase {
        Phase::Hook => "Show interest and ask what is needed to proceed.",
        Phase::Probe => {
            "Clarify the exact workflow and payment channel. Ask one targeted question: \
             either (a) confirm amount and whether it's UPI or bank transfer, or (b) what link/form they want opened."
        }
        Phase::NotScam => "Be neutral and non-committal; no asks.",
        Phase::Harvest | Phase::Screen => {
            "Harvest actionable intel with one concrete ask. Choose ONE based on their last message: \
             UPI ID, OR account number+IFSC, OR the exact URL. Use a plausible pretext (avoid mistakes/need exact copy)."
        }
    };

    let history_block = format_history(history);
    format!(
        "{PERSONA}\nTactic for this turn: {tactic}\n\nConversation so far:\n{history_block}\n\
         User (latest): {message}\n\nCraft the next reply. Do not include meta commentary."
    )
}

fn format_history(history: &[HistoryEntry]) -> String {
    let start = history.len().saturating_sub(10);
    history[start..]
        .iter()
        .map(|h| {
            let prefix = match h.role {
                Role::User => "User",
                Role::Agent => "You",
            };
            format!("{prefix}: {}", h.message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use lurebot_core::LurebotError;

    struct CannedGenerator(String);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LurebotError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LurebotError> {
            Err(LurebotError::Provider {
                message: "credentials missing".into(),
                source: None,
            })
        }
    }

    fn history_of(len: usize) -> Vec<HistoryEntry> {
        (0..len)
            .map(|i| {
                let role = if i % 2 == 0 { Role::User } else { Role::Agent };
                HistoryEntry::new(role, format!("msg {i}"))
            })
            .collect()
    }

    #[tokio::test]
    async fn template_fallback_cycles_per_history_length() {
        let replier = Replier::new();

        let first = replier.generate("x", &history_of(0), Phase::Hook).await;
        let second = replier.generate("x", &history_of(1), Phase::Hook).await;
        let third = replier.generate("x", &history_of(2), Phase::Hook).await;

        assert_eq!(first, HOOK_LINES[0]);
        assert_eq!(second, HOOK_LINES[1]);
        assert_eq!(third, HOOK_LINES[0]);
    }

    #[tokio::test]
    async fn each_phase_uses_its_own_pool() {
        let replier = Replier::new();
        let history = history_of(0);

        assert_eq!(
            replier.generate("x", &history, Phase::NotScam).await,
            NEUTRAL_LINES[0]
        );
        assert_eq!(
            replier.generate("x", &history, Phase::Probe).await,
            PROBE_LINES[0]
        );
        assert_eq!(
            replier.generate("x", &history, Phase::Harvest).await,
            HARVEST_LINES[0]
        );
    }

    #[tokio::test]
    async fn external_output_wins_when_available() {
        let replier = Replier::new().with_generator(
            Arc::new(CannedGenerator("  Sure, what's the UPI ID?  ".into())),
            Duration::from_secs(1),
        );

        let reply = replier.generate("pay me", &history_of(1), Phase::Harvest).await;
        assert_eq!(reply, "Sure, what's the UPI ID?");
    }

    #[tokio::test]
    async fn generator_error_degrades_to_template() {
        let replier = Replier::new()
            .with_generator(Arc::new(FailingGenerator), Duration::from_secs(1));

        let reply = replier.generate("pay me", &history_of(0), Phase::Hook).await;
        assert_eq!(reply, HOOK_LINES[0]);
    }

    #[tokio::test]
    async fn blank_generator_output_degrades_to_template() {
        let replier = Replier::new().with_generator(
            Arc::new(CannedGenerator("   ".into())),
            Duration::from_secs(1),
        );

        let reply = replier.generate("pay me", &history_of(0), Phase::Probe).await;
        assert_eq!(reply, PROBE_LINES[0]);
    }

    #[test]
    fn prompt_includes_persona_tactic_and_recent_history() {
        let history = vec![
            HistoryEntry::new(Role::User, "you won a prize"),
            HistoryEntry::new(Role::Agent, "oh? tell me more"),
        ];
        let prompt = build_agent_prompt("send the fee", &history, Phase::Probe);

        assert!(prompt.contains("slightly cautious adult"));
        assert!(prompt.contains("payment channel"));
        assert!(prompt.contains("User: you won a prize"));
        assert!(prompt.contains("You: oh? tell me more"));
        assert!(prompt.contains("User (latest): send the fee"));
    }

    #[test]
    fn prompt_history_is_capped_at_ten_entries() {
        let history = history_of(25);
        let prompt = build_agent_prompt("x", &history, Phase::Harvest);

        assert!(!prompt.contains("msg 14"));
        assert!(prompt.contains("msg 15"));
        assert!(prompt.contains("msg 24"));
    }
}
