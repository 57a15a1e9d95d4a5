use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tabletalk_core::{
    CategoryPolicy, DeckRng, FilterPolicy, PromptPool, SessionDeck, SessionPhase, WildcardPolicy,
};
use tabletalk_data::{default_assets_dir, load_card_sets, load_prompts};

const DEFAULT_SESSION_SEED: u64 = 0x0DD5;

#[derive(Debug, Clone)]
struct CliOptions {
    tui: bool,
    seed: u64,
    assets_dir: Option<PathBuf>,
    policy: Option<String>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut tui = false;
    let mut seed = DEFAULT_SESSION_SEED;
    let mut assets_dir = None;
    let mut policy = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--tui" => tui = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(parsed) = value.parse::<u64>() {
                        seed = parsed;
                    }
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    assets_dir = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--policy" => {
                if let Some(value) = args.get(idx + 1) {
                    policy = Some(value.clone());
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions {
        tui,
        seed,
        assets_dir,
        policy,
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if options.tui {
        return tabletalk_cui::run(tabletalk_cui::LaunchOptions {
            seed: Some(options.seed),
            assets_dir: options.assets_dir,
            policy: options.policy,
        });
    }
    run_repl(options)
}

fn run_repl(options: CliOptions) -> Result<()> {
    let assets = options.assets_dir.unwrap_or_else(default_assets_dir);
    let pool = load_prompts(&assets).context("load prompts")?;
    let mut policy: Box<dyn FilterPolicy> = match options.policy.as_deref() {
        Some("wildcard") => Box::new(WildcardPolicy::new()),
        _ => {
            let toggles = load_card_sets(&assets).context("load card sets")?;
            Box::new(CategoryPolicy::new(toggles))
        }
    };
    let mut rng = DeckRng::from_seed(options.seed);
    let mut deck = SessionDeck::new();
    let mut players: Vec<String> = Vec::new();
    let mut turn = 0usize;

    println!("tabletalk (seed={})", rng.seed());
    print_help();

    loop {
        let Some(line) = read_line("> ") else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        match cmd {
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            "show" | "s" => print_show(&deck, &players, turn),
            "sets" => print_sets(policy.as_ref(), &pool),
            "toggle" | "t" => {
                let Some(id) = args.first() else {
                    println!("usage: toggle <set-id>");
                    continue;
                };
                // unknown ids are ignored by contract
                policy.set_toggle(id);
                if deck.phase() != SessionPhase::Empty {
                    deck.rebuild(&pool, policy.as_ref(), &mut rng);
                    turn = 0;
                    println!("card sets changed, deck rebuilt");
                }
                print_sets(policy.as_ref(), &pool);
            }
            "start" => {
                if SessionDeck::eligible_count(&pool, policy.as_ref()) == 0 {
                    println!("nothing to draw: enable at least one card set");
                    continue;
                }
                deck.start(&pool, policy.as_ref(), &mut rng);
                turn = 0;
                println!("session started, {} to go", deck.remaining_count());
                print_show(&deck, &players, turn);
            }
            "next" | "n" => {
                if deck.phase() == SessionPhase::Empty {
                    println!("no session: type start first");
                    continue;
                }
                deck.advance();
                if deck.current().is_some() && !players.is_empty() {
                    turn = (turn + 1) % players.len();
                }
                print_show(&deck, &players, turn);
            }
            "back" | "b" => {
                if !deck.can_retreat() {
                    println!("nothing to go back to");
                    continue;
                }
                deck.retreat();
                if !players.is_empty() {
                    turn = turn.checked_sub(1).unwrap_or(players.len() - 1);
                }
                print_show(&deck, &players, turn);
            }
            "flip" | "f" => {
                deck.toggle_reveal();
                print_show(&deck, &players, turn);
            }
            "players" => {
                if players.is_empty() {
                    println!("no players");
                } else {
                    for (idx, name) in players.iter().enumerate() {
                        let marker = if idx == turn % players.len() { "*" } else { " " };
                        println!("{marker} {name}");
                    }
                }
            }
            "add" => {
                if args.is_empty() {
                    println!("usage: add <name>");
                } else {
                    players.push(args.join(" "));
                }
            }
            _ => println!("unknown command '{cmd}' (help lists commands)"),
        }
    }
    Ok(())
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

fn print_help() {
    println!("commands:");
    println!("  show        current card, remaining count, reveal state");
    println!("  sets        list card sets and eligible prompt count");
    println!("  toggle <id> flip a card set (rebuilds an active deck)");
    println!("  start       shuffle the eligible prompts and deal");
    println!("  next        draw the next card");
    println!("  back        return to the previous card");
    println!("  flip        reveal or hide the current card");
    println!("  players     list players, * marks whose turn it is");
    println!("  add <name>  add a player");
    println!("  quit        leave");
}

fn print_show(deck: &SessionDeck, players: &[String], turn: usize) {
    let view = deck.snapshot();
    match view.current {
        Some(prompt) => {
            let set = prompt.category.as_deref().unwrap_or("-");
            if view.revealed {
                println!("[{set}] {}", prompt.text);
            } else {
                println!("[{set}] (hidden - flip to reveal)");
            }
        }
        None => match deck.phase() {
            SessionPhase::Empty => println!("no session"),
            _ => println!("deck exhausted"),
        },
    }
    let back = if view.can_retreat { "yes" } else { "no" };
    println!("{} left | back available: {back}", view.remaining);
    if !players.is_empty() {
        println!("up: {}", players[turn % players.len()]);
    }
}

fn print_sets(policy: &dyn FilterPolicy, pool: &PromptPool) {
    for toggle in policy.toggles() {
        let mark = if toggle.enabled { "x" } else { " " };
        if toggle.description.is_empty() {
            println!("[{mark}] {} ({})", toggle.name, toggle.id);
        } else {
            println!("[{mark}] {} ({}) - {}", toggle.name, toggle.id, toggle.description);
        }
    }
    println!(
        "{} of {} prompts eligible",
        SessionDeck::eligible_count(pool, policy),
        pool.len()
    );
}
