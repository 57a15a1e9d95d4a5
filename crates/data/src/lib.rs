//! Asset loading for the prompt pool and card set definitions.

pub mod load;
pub mod schema;

pub use load::{default_assets_dir, load_card_sets, load_prompts};
pub use schema::{CardSetRecord, PromptRecord};
