//! Canned user prompts
//!
//! Interactive hosts implement [`UserPrompt`] against their own UI.
//! [`PresetPrompt`] serves embedded callers and tests: answers are fixed up
//! front, and a missing answer behaves exactly like a cancelled dialog.

use kinship_core::{PromptId, UserPrompt};
use std::collections::HashMap;

/// Prompt collaborator with predetermined answers
#[derive(Debug, Clone, Default)]
pub struct PresetPrompt {
    answers: HashMap<PromptId, String>,
}

impl PresetPrompt {
    /// A prompt with no answers: every ask is a cancellation
    pub fn cancelled() -> Self {
        Self::default()
    }

    /// A prompt answering the year question
    pub fn with_year(year: impl Into<String>) -> Self {
        Self::default().and(PromptId::Year, year)
    }

    /// A prompt answering the surname question
    pub fn with_surname(surname: impl Into<String>) -> Self {
        Self::default().and(PromptId::Surname, surname)
    }

    /// Add an answer for `prompt`
    pub fn and(mut self, prompt: PromptId, answer: impl Into<String>) -> Self {
        self.answers.insert(prompt, answer.into());
        self
    }
}

impl UserPrompt for PresetPrompt {
    fn ask(&self, prompt: PromptId, _label: &str) -> Option<String> {
        self.answers.get(&prompt).cloned()
    }
}
