use crate::schema::{CardSetRecord, PromptRecord};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::{env, fs};

use tabletalk_core::{Prompt, PromptPool, Toggle};

const PROMPTS_FILE: &str = "prompts.json";
const CARD_SETS_FILE: &str = "card_sets.json";

/// Assets directory: `TABLETALK_ASSETS` when set, `assets` otherwise.
pub fn default_assets_dir() -> PathBuf {
    env::var_os("TABLETALK_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

pub fn load_prompts(dir: &Path) -> anyhow::Result<PromptPool> {
    let path = dir.join(PROMPTS_FILE);
    let records: Vec<PromptRecord> = load_json(&path)?;
    let prompts = records
        .into_iter()
        .map(|record| Prompt {
            id: record.id,
            text: record.text,
            wildcard: record.wildcard,
            category: record.category,
        })
        .collect();
    PromptPool::new(prompts).with_context(|| format!("validate {}", path.display()))
}

pub fn load_card_sets(dir: &Path) -> anyhow::Result<Vec<Toggle>> {
    let path = dir.join(CARD_SETS_FILE);
    let records: Vec<CardSetRecord> = load_json(&path)?;
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.clone()) {
            bail!("duplicate card set id '{}' in {}", record.id, path.display());
        }
    }
    Ok(records
        .into_iter()
        .map(|record| Toggle::new(record.id, record.name, record.description))
        .collect())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
