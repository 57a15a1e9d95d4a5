use crate::persistence::{default_roster_path, load_roster, save_roster};
use anyhow::{bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;
use tabletalk_core::{
    CategoryPolicy, DeckRng, FilterPolicy, PromptPool, SessionDeck, SessionPhase, WildcardPolicy,
};
use tabletalk_data::{default_assets_dir, load_card_sets, load_prompts};

pub const DEFAULT_SESSION_SEED: u64 = 0x0DD5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Game,
}

/// Which filter policy the session runs with. Chosen at launch, not
/// branched on anywhere past construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyMode {
    #[default]
    CardSets,
    WildcardFlag,
}

impl PolicyMode {
    pub fn from_opt(value: Option<&str>) -> Self {
        match value {
            Some("wildcard") => Self::WildcardFlag,
            _ => Self::CardSets,
        }
    }
}

pub struct App {
    pub seed: u64,
    pub pool: PromptPool,
    pub policy: Box<dyn FilterPolicy>,
    pub rng: DeckRng,
    pub deck: SessionDeck,
    pub screen: Screen,
    pub setup_cursor: usize,
    pub players: Vec<String>,
    pub turn: usize,
    pub roster_path: Option<PathBuf>,
    pub status_line: String,
    pub show_help: bool,
    pub name_prompt: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(assets_dir: Option<PathBuf>, mode: PolicyMode, seed: u64) -> Result<Self> {
        let assets = assets_dir.unwrap_or_else(default_assets_dir);
        let pool = load_prompts(&assets).context("load prompts")?;
        if pool.is_empty() {
            bail!("prompt pool in {} is empty", assets.display());
        }
        let policy: Box<dyn FilterPolicy> = match mode {
            PolicyMode::CardSets => {
                let toggles = load_card_sets(&assets).context("load card sets")?;
                Box::new(CategoryPolicy::new(toggles))
            }
            PolicyMode::WildcardFlag => Box::new(WildcardPolicy::new()),
        };

        let roster_path = default_roster_path();
        let players = roster_path
            .as_deref()
            .and_then(|path| load_roster(path).ok())
            .unwrap_or_default();

        Ok(Self {
            seed,
            pool,
            policy,
            rng: DeckRng::from_seed(seed),
            deck: SessionDeck::new(),
            screen: Screen::Setup,
            setup_cursor: 0,
            players,
            turn: 0,
            roster_path,
            status_line: "ready".to_string(),
            show_help: false,
            name_prompt: None,
            should_quit: false,
        })
    }

    pub fn on_tick(&mut self) {}

    pub fn eligible_count(&self) -> usize {
        SessionDeck::eligible_count(&self.pool, self.policy.as_ref())
    }

    pub fn can_start(&self) -> bool {
        self.policy.any_enabled() && self.eligible_count() > 0
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = self.policy.toggles().len();
        if len == 0 {
            return;
        }
        if down {
            self.setup_cursor = (self.setup_cursor + 1) % len;
        } else {
            self.setup_cursor = self.setup_cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Flips the card set under the cursor. An in-progress session is
    /// rebuilt on the spot so it only holds prompts the new policy admits.
    pub fn toggle_selected_set(&mut self) {
        if self.screen != Screen::Setup {
            return;
        }
        let Some(toggle) = self.policy.toggles().get(self.setup_cursor) else {
            return;
        };
        let id = toggle.id.clone();
        self.policy.set_toggle(&id);
        if self.deck.phase() != SessionPhase::Empty {
            self.deck
                .rebuild(&self.pool, self.policy.as_ref(), &mut self.rng);
            self.turn = 0;
            self.status_line = format!("card sets changed, deck rebuilt ({id})");
        } else {
            self.status_line = format!("{} eligible prompts", self.eligible_count());
        }
    }

    pub fn start_session(&mut self) {
        if !self.can_start() {
            self.status_line = "enable at least one card set to start".to_string();
            return;
        }
        self.deck
            .start(&self.pool, self.policy.as_ref(), &mut self.rng);
        self.turn = 0;
        self.screen = Screen::Game;
        self.status_line = format!("session started, {} to go", self.deck.remaining_count());
    }

    pub fn advance(&mut self) {
        if self.screen != Screen::Game || self.deck.phase() == SessionPhase::Empty {
            return;
        }
        self.deck.advance();
        if self.deck.current().is_some() {
            self.rotate_turn_forward();
            self.status_line = format!("{} left", self.deck.remaining_count());
        } else {
            self.status_line = "deck exhausted".to_string();
        }
    }

    pub fn retreat(&mut self) {
        if self.screen != Screen::Game {
            return;
        }
        if !self.deck.can_retreat() {
            self.status_line = "nothing to go back to".to_string();
            return;
        }
        self.deck.retreat();
        self.rotate_turn_back();
        self.status_line = format!("{} left", self.deck.remaining_count());
    }

    pub fn toggle_reveal(&mut self) {
        if self.screen == Screen::Game {
            self.deck.toggle_reveal();
        }
    }

    pub fn open_setup(&mut self) {
        self.screen = Screen::Setup;
        self.status_line = format!("{} eligible prompts", self.eligible_count());
    }

    pub fn current_player(&self) -> Option<&str> {
        if self.players.is_empty() {
            return None;
        }
        self.players
            .get(self.turn % self.players.len())
            .map(String::as_str)
    }

    fn rotate_turn_forward(&mut self) {
        if !self.players.is_empty() {
            self.turn = (self.turn + 1) % self.players.len();
        }
    }

    fn rotate_turn_back(&mut self) {
        let len = self.players.len();
        if len > 0 {
            self.turn = self.turn.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn open_name_prompt(&mut self) {
        if self.screen == Screen::Setup {
            self.name_prompt = Some(String::new());
        }
    }

    pub fn remove_last_player(&mut self) {
        if self.screen != Screen::Setup {
            return;
        }
        match self.players.pop() {
            Some(name) => {
                self.turn = 0;
                self.persist_roster();
                self.status_line = format!("removed {name}");
            }
            None => self.status_line = "no players to remove".to_string(),
        }
    }

    /// Consumes key events while the add-player prompt is open. Returns
    /// true when the event was handled here.
    pub fn handle_name_prompt_key(&mut self, key: KeyEvent) -> bool {
        let Some(buffer) = self.name_prompt.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.name_prompt = None;
            }
            KeyCode::Enter => {
                let name = buffer.trim().to_string();
                self.name_prompt = None;
                if !name.is_empty() {
                    self.players.push(name);
                    self.persist_roster();
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(ch) => {
                buffer.push(ch);
            }
            _ => {}
        }
        true
    }

    fn persist_roster(&mut self) {
        let Some(path) = self.roster_path.clone() else {
            self.status_line = "roster path unavailable, not saved".to_string();
            return;
        };
        match save_roster(&self.players, &path) {
            Ok(()) => {
                self.status_line = format!("{} players saved", self.players.len());
            }
            Err(err) => {
                self.status_line = format!("roster save failed: {err}");
            }
        }
    }
}
