use serde::Deserialize;

/// One record of `prompts.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptRecord {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub wildcard: bool,
    #[serde(default)]
    pub category: Option<String>,
}

/// One record of `card_sets.json`: a selectable card set shown on the
/// setup screen. All sets start enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct CardSetRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
