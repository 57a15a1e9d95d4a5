use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One unit of game content: the prompt text plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub wildcard: bool,
    #[serde(default)]
    pub category: Option<String>,
}

impl Prompt {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            wildcard: false,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn as_wildcard(mut self) -> Self {
        self.wildcard = true;
        self
    }
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("duplicate prompt id {0}")]
    DuplicateId(u32),
    #[error("prompt {0} has empty text")]
    EmptyText(u32),
}

/// The full, immutable set of candidate prompts loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct PromptPool {
    prompts: Vec<Prompt>,
}

impl PromptPool {
    pub fn new(prompts: Vec<Prompt>) -> Result<Self, PoolError> {
        let mut seen = HashSet::new();
        for prompt in &prompts {
            if prompt.text.trim().is_empty() {
                return Err(PoolError::EmptyText(prompt.id));
            }
            if !seen.insert(prompt.id) {
                return Err(PoolError::DuplicateId(prompt.id));
            }
        }
        Ok(Self { prompts })
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Distinct category labels present in the pool, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .prompts
            .iter()
            .filter_map(|prompt| prompt.category.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        labels.sort();
        labels
    }
}
