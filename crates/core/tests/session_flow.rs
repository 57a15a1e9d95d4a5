use tabletalk_core::{
    CategoryPolicy, DeckRng, FilterPolicy, Prompt, PromptPool, SessionDeck, SessionPhase, Toggle,
    WildcardPolicy, WILDCARD_TOGGLE_ID,
};

fn five_prompt_pool() -> PromptPool {
    let prompts = vec![
        Prompt::new(1, "A").with_category("Reflection"),
        Prompt::new(2, "B").with_category("Reflection"),
        Prompt::new(3, "C").with_category("Connection"),
        Prompt::new(4, "D").with_category("Connection"),
        Prompt::new(5, "E").with_category("Perception"),
    ];
    PromptPool::new(prompts).expect("pool")
}

fn all_sets_policy() -> CategoryPolicy {
    CategoryPolicy::new(vec![
        Toggle::new("Reflection", "Reflection", ""),
        Toggle::new("Connection", "Connection", ""),
        Toggle::new("Perception", "Perception", ""),
    ])
}

fn collect_ids(deck: &SessionDeck) -> Vec<u32> {
    let mut deck = deck.clone();
    let mut ids = Vec::new();
    if let Some(prompt) = deck.current() {
        ids.push(prompt.id);
    }
    while deck.remaining_count() > 0 {
        deck.advance();
        if let Some(prompt) = deck.current() {
            ids.push(prompt.id);
        }
    }
    ids
}

#[test]
fn start_yields_exact_permutation_of_eligible_prompts() {
    let pool = five_prompt_pool();
    let mut policy = all_sets_policy();
    policy.set_toggle("Perception");
    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(42);
    deck.start(&pool, &policy, &mut rng);

    let mut ids = collect_ids(&deck);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn advance_then_retreat_restores_prior_state() {
    let pool = five_prompt_pool();
    let policy = all_sets_policy();
    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(11);
    deck.start(&pool, &policy, &mut rng);

    let before = deck.current().expect("current").id;
    let remaining_before = deck.remaining_count();
    let history_before = deck.history_len();

    deck.advance();
    deck.retreat();

    assert_eq!(deck.current().expect("current").id, before);
    assert_eq!(deck.remaining_count(), remaining_before);
    assert_eq!(deck.history_len(), history_before);
}

#[test]
fn exhausts_after_exactly_eligible_count_advances() {
    let pool = five_prompt_pool();
    let policy = all_sets_policy();
    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(3);
    deck.start(&pool, &policy, &mut rng);

    // start already drew one; four more keep the deck active
    for _ in 0..4 {
        assert_eq!(deck.phase(), SessionPhase::Active);
        deck.advance();
    }
    assert_eq!(deck.phase(), SessionPhase::Active);
    deck.advance();
    assert_eq!(deck.phase(), SessionPhase::Exhausted);
    assert!(deck.current().is_none());
    assert_eq!(deck.remaining_count(), 0);
}

#[test]
fn retreat_unavailable_on_fresh_session() {
    let pool = five_prompt_pool();
    let policy = all_sets_policy();
    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(8);
    deck.start(&pool, &policy, &mut rng);

    assert!(!deck.can_retreat());
    let before = deck.current().expect("current").id;
    deck.retreat();
    assert_eq!(deck.current().expect("current").id, before);
    assert_eq!(deck.remaining_count(), 4);
}

#[test]
fn all_toggles_disabled_yields_empty_start() {
    let pool = five_prompt_pool();
    let mut policy = all_sets_policy();
    for id in ["Reflection", "Connection", "Perception"] {
        policy.set_toggle(id);
    }
    assert_eq!(SessionDeck::eligible_count(&pool, &policy), 0);

    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(8);
    deck.start(&pool, &policy, &mut rng);
    assert!(deck.current().is_none());
    assert_eq!(deck.remaining_count(), 0);
}

#[test]
fn full_walk_and_reverse_walk_are_symmetric() {
    let pool = five_prompt_pool();
    let policy = all_sets_policy();
    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(1234);
    deck.start(&pool, &policy, &mut rng);

    let mut order = vec![deck.current().expect("x1").id];
    for _ in 0..4 {
        deck.advance();
        order.push(deck.current().expect("xn").id);
    }
    assert_eq!(deck.history_len(), 4);

    deck.advance();
    assert!(deck.current().is_none());
    assert_eq!(deck.history_len(), 5);

    // walking back visits X5, X4, X3, X2, X1 in reverse draw order
    for expected in order.iter().rev() {
        deck.retreat();
        assert_eq!(deck.current().expect("current").id, *expected);
    }
    assert!(!deck.can_retreat());
    assert_eq!(deck.remaining_count(), 4);
}

#[test]
fn disabling_wildcards_and_rebuilding_drops_wildcard_prompts() {
    let mut prompts: Vec<Prompt> = (1..=7)
        .map(|id| Prompt::new(id, format!("plain {id}")))
        .collect();
    for id in 8..=10 {
        prompts.push(Prompt::new(id, format!("wild {id}")).as_wildcard());
    }
    let pool = PromptPool::new(prompts).expect("pool");

    let mut policy = WildcardPolicy::new();
    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(77);
    deck.start(&pool, &policy, &mut rng);
    deck.advance();
    deck.advance();
    assert!(deck.can_retreat());

    policy.set_toggle(WILDCARD_TOGGLE_ID);
    deck.rebuild(&pool, &policy, &mut rng);

    assert!(!deck.can_retreat());
    assert_eq!(deck.history_len(), 0);
    let ids = collect_ids(&deck);
    assert_eq!(ids.len(), 7);
    assert!(ids.iter().all(|id| *id <= 7));
}

#[test]
fn rebuild_holds_only_prompts_matching_the_new_policy() {
    let pool = five_prompt_pool();
    let mut policy = all_sets_policy();
    let mut deck = SessionDeck::new();
    let mut rng = DeckRng::from_seed(5);
    deck.start(&pool, &policy, &mut rng);

    policy.set_toggle("Reflection");
    deck.rebuild(&pool, &policy, &mut rng);

    let ids = collect_ids(&deck);
    assert!(ids.iter().all(|id| *id >= 3));
    assert_eq!(ids.len(), 3);
    assert!(pool
        .prompts()
        .iter()
        .filter(|prompt| ids.contains(&prompt.id))
        .all(|prompt| policy.is_eligible(prompt)));
}
