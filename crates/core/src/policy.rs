use crate::Prompt;
use serde::{Deserialize, Serialize};

/// One named on/off switch shown on the setup screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toggle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl Toggle {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            enabled: true,
        }
    }
}

/// Maps a set of toggles to an eligibility predicate over prompts. The
/// concrete toggle scheme is chosen at session construction; the session
/// deck only sees this contract.
pub trait FilterPolicy {
    fn toggles(&self) -> &[Toggle];

    /// Flips the named toggle. Unknown ids are silently ignored; they
    /// cannot occur through the UI surface.
    fn set_toggle(&mut self, id: &str);

    fn is_eligible(&self, prompt: &Prompt) -> bool;

    fn any_enabled(&self) -> bool {
        self.toggles().iter().any(|toggle| toggle.enabled)
    }
}

fn flip_toggle(toggles: &mut [Toggle], id: &str) {
    if let Some(toggle) = toggles.iter_mut().find(|toggle| toggle.id == id) {
        toggle.enabled = !toggle.enabled;
    }
}

/// Category-set mode: a prompt is eligible iff its category is among the
/// enabled toggle ids. Uncategorized prompts count as universal and pass
/// whenever at least one toggle is enabled.
#[derive(Debug, Clone)]
pub struct CategoryPolicy {
    toggles: Vec<Toggle>,
}

impl CategoryPolicy {
    pub fn new(toggles: Vec<Toggle>) -> Self {
        Self { toggles }
    }

    /// Builds one toggle per distinct category in the pool.
    pub fn from_pool(pool: &crate::PromptPool) -> Self {
        let toggles = pool
            .categories()
            .into_iter()
            .map(|label| Toggle::new(label.clone(), label, ""))
            .collect();
        Self { toggles }
    }
}

impl FilterPolicy for CategoryPolicy {
    fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    fn set_toggle(&mut self, id: &str) {
        flip_toggle(&mut self.toggles, id);
    }

    fn is_eligible(&self, prompt: &Prompt) -> bool {
        match prompt.category.as_deref() {
            Some(category) => self
                .toggles
                .iter()
                .any(|toggle| toggle.enabled && toggle.id == category),
            None => self.any_enabled(),
        }
    }
}

pub const WILDCARD_TOGGLE_ID: &str = "wildcards";

/// Single-flag mode: one toggle controlling whether wildcard prompts take
/// part. Everything else is always eligible.
#[derive(Debug, Clone)]
pub struct WildcardPolicy {
    toggles: Vec<Toggle>,
}

impl WildcardPolicy {
    pub fn new() -> Self {
        Self {
            toggles: vec![Toggle::new(
                WILDCARD_TOGGLE_ID,
                "Wildcards",
                "Include wildcard prompts",
            )],
        }
    }
}

impl Default for WildcardPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPolicy for WildcardPolicy {
    fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    fn set_toggle(&mut self, id: &str) {
        flip_toggle(&mut self.toggles, id);
    }

    fn is_eligible(&self, prompt: &Prompt) -> bool {
        if self.toggles[0].enabled {
            true
        } else {
            !prompt.wildcard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Prompt> {
        vec![
            Prompt::new(1, "a").with_category("Reflection"),
            Prompt::new(2, "b").with_category("Connection"),
            Prompt::new(3, "c"),
            Prompt::new(4, "d").with_category("Wildcard").as_wildcard(),
        ]
    }

    #[test]
    fn category_policy_filters_by_enabled_sets() {
        let mut policy = CategoryPolicy::new(vec![
            Toggle::new("Reflection", "Reflection", ""),
            Toggle::new("Connection", "Connection", ""),
            Toggle::new("Wildcard", "Wildcards", ""),
        ]);
        policy.set_toggle("Connection");
        let eligible: Vec<u32> = sample()
            .into_iter()
            .filter(|prompt| policy.is_eligible(prompt))
            .map(|prompt| prompt.id)
            .collect();
        assert_eq!(eligible, vec![1, 3, 4]);
    }

    #[test]
    fn all_disabled_selects_nothing() {
        let mut policy = CategoryPolicy::new(vec![
            Toggle::new("Reflection", "Reflection", ""),
            Toggle::new("Connection", "Connection", ""),
            Toggle::new("Wildcard", "Wildcards", ""),
        ]);
        policy.set_toggle("Reflection");
        policy.set_toggle("Connection");
        policy.set_toggle("Wildcard");
        assert!(!policy.any_enabled());
        assert!(sample().iter().all(|prompt| !policy.is_eligible(prompt)));
    }

    #[test]
    fn from_pool_builds_one_toggle_per_category() {
        let pool = crate::PromptPool::new(sample()).expect("pool");
        let policy = CategoryPolicy::from_pool(&pool);
        let ids: Vec<&str> = policy
            .toggles()
            .iter()
            .map(|toggle| toggle.id.as_str())
            .collect();
        assert_eq!(ids, vec!["Connection", "Reflection", "Wildcard"]);
        assert!(policy.any_enabled());
    }

    #[test]
    fn unknown_toggle_id_is_ignored() {
        let mut policy = WildcardPolicy::new();
        policy.set_toggle("no-such-toggle");
        assert!(policy.toggles()[0].enabled);
    }

    #[test]
    fn wildcard_policy_flag() {
        let mut policy = WildcardPolicy::new();
        assert!(sample().iter().all(|prompt| policy.is_eligible(prompt)));
        policy.set_toggle(WILDCARD_TOGGLE_ID);
        let eligible: Vec<u32> = sample()
            .into_iter()
            .filter(|prompt| policy.is_eligible(prompt))
            .map(|prompt| prompt.id)
            .collect();
        assert_eq!(eligible, vec![1, 2, 3]);
    }
}
