use crate::{DeckRng, FilterPolicy, Prompt, PromptPool};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session has been started yet.
    Empty,
    /// A prompt is currently presented.
    Active,
    /// The last prompt was drawn past; nothing is presented.
    Exhausted,
}

/// Read-only view handed to presentation after every mutating call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckView {
    pub current: Option<Prompt>,
    pub revealed: bool,
    pub remaining: usize,
    pub can_retreat: bool,
}

/// Per-session deck state. Every prompt lives in exactly one of
/// `remaining`, `current`, or `history`; the total count only changes at
/// rebuild. `remaining` is a stack with the next draw on top.
#[derive(Debug, Clone, Default)]
pub struct SessionDeck {
    remaining: Vec<Prompt>,
    current: Option<Prompt>,
    history: Vec<Prompt>,
    revealed: bool,
    started: bool,
}

impl SessionDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.started {
            SessionPhase::Empty
        } else if self.current.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Exhausted
        }
    }

    pub fn current(&self) -> Option<&Prompt> {
        self.current.as_ref()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_retreat(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn snapshot(&self) -> DeckView {
        DeckView {
            current: self.current.clone(),
            revealed: self.revealed,
            remaining: self.remaining.len(),
            can_retreat: self.can_retreat(),
        }
    }

    /// Prompts the policy would admit right now. Callers check this before
    /// starting so an empty eligible set is surfaced as a disabled start
    /// action rather than an empty session.
    pub fn eligible_count(pool: &PromptPool, policy: &dyn FilterPolicy) -> usize {
        pool.prompts()
            .iter()
            .filter(|prompt| policy.is_eligible(prompt))
            .count()
    }

    /// Filters the pool, shuffles the eligible prompts, and presents the
    /// first one. Callable from any phase; any prior history is discarded.
    pub fn start(&mut self, pool: &PromptPool, policy: &dyn FilterPolicy, rng: &mut DeckRng) {
        let mut eligible: Vec<Prompt> = pool
            .prompts()
            .iter()
            .filter(|prompt| policy.is_eligible(prompt))
            .cloned()
            .collect();
        rng.shuffle(&mut eligible);
        self.current = eligible.pop();
        self.remaining = eligible;
        self.history.clear();
        self.revealed = false;
        self.started = true;
    }

    /// Rebuild after a policy change. Same operation as `start`; the loss
    /// of undo history on a filter change is deliberate.
    pub fn rebuild(&mut self, pool: &PromptPool, policy: &dyn FilterPolicy, rng: &mut DeckRng) {
        self.start(pool, policy, rng);
    }

    /// Draws the next prompt. The presented prompt moves onto history;
    /// drawing past the last prompt leaves the deck exhausted. No-op
    /// before the first start.
    pub fn advance(&mut self) {
        if !self.started {
            return;
        }
        if let Some(prompt) = self.current.take() {
            self.history.push(prompt);
        }
        self.current = self.remaining.pop();
        self.revealed = false;
    }

    /// Steps back to the previously presented prompt. The presented prompt
    /// returns to the top of `remaining`, so it is the next draw again.
    /// No-op when there is nothing to go back to; callers check
    /// `can_retreat` first.
    pub fn retreat(&mut self) {
        let Some(previous) = self.history.pop() else {
            return;
        };
        if let Some(prompt) = self.current.take() {
            self.remaining.push(prompt);
        }
        self.current = Some(previous);
        self.revealed = false;
    }

    /// Shows or hides the presented prompt's text. No-op without one.
    pub fn toggle_reveal(&mut self) {
        if self.current.is_some() {
            self.revealed = !self.revealed;
        }
    }
}
