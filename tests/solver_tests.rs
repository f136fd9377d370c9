use triadsage::{
    best_move, best_move_with_observer, evaluate, gamestate_from_file, minimax, Card, EvalWeights,
    GameState, Move, SearchConfig, SearchObserver, SearchResult, Side,
};

/// Records root moves in the order they were scored.
#[derive(Default)]
struct RecordingObserver {
    root_moves: Vec<(Move, f64)>,
    completed: Option<SearchResult>,
}

impl SearchObserver for RecordingObserver {
    fn on_root_move(&mut self, _after: &GameState, mv: Move, score: f64) {
        self.root_moves.push((mv, score));
    }

    fn on_search_complete(&mut self, _root: &GameState, result: &SearchResult) {
        self.completed = Some(result.clone());
    }
}

fn card(symbol: &str, top: u8, left: u8, right: u8, bottom: u8) -> Card {
    Card::new(symbol, top, left, right, bottom).expect("valid card")
}

fn id(state: &GameState, symbol: &str) -> u16 {
    state.cards().id_by_symbol(symbol).unwrap()
}

fn score_only(max_depth: u8) -> SearchConfig {
    SearchConfig {
        max_depth,
        weights: EvalWeights::score_only(),
    }
}

fn opening() -> GameState {
    gamestate_from_file("data/gamestate.json").expect("sample game state")
}

/// Positions 1 and 3 open, everything else held by the Player with weak sides.
/// Player holds one weak card; Opponent holds a strong card then a weak one.
fn two_corners_left() -> GameState {
    let mut b = GameState::builder(Side::Player);
    for (i, pos) in [2u8, 4, 5, 6, 7, 8, 9].into_iter().enumerate() {
        b.board_card(Side::Player, card(&format!("B{i}"), 1, 1, 1, 1), pos).unwrap();
    }
    b.hand_card(Side::Player, card("Pc", 1, 1, 1, 1)).unwrap();
    b.hand_card(Side::Opponent, card("Os", 10, 10, 10, 10)).unwrap();
    b.hand_card(Side::Opponent, card("Ow", 1, 1, 1, 1)).unwrap();
    b.build()
}

#[test]
fn cutoff_returns_evaluation_without_recursing() {
    let state = opening();
    let w = EvalWeights::default();
    let mut nodes = 0u64;
    let v = minimax(&state, true, 2, 2, Side::Player, &w, &mut nodes);
    assert_eq!(nodes, 1);
    assert_eq!(v, evaluate(&state, Side::Player, &w));
}

#[test]
fn depth_zero_searches_to_the_end() {
    let state = two_corners_left();
    let unlimited = best_move(&state, &score_only(0));
    let full = best_move(&state, &score_only(9));

    assert_eq!(unlimited.best_move, full.best_move);
    assert_eq!(unlimited.score, 7.0);
    assert_eq!(unlimited.score, full.score);
    assert_eq!(unlimited.nodes, full.nodes);
    assert_eq!(unlimited.max_depth, 0);

    // Same through the raw search: the limit is never reached
    let w = EvalWeights::score_only();
    let pc = id(&state, "Pc");
    let after = triadsage::apply_move(&state, Move { card_id: pc, position: 1 }).unwrap();
    let mut nodes = 0u64;
    let v = minimax(&after, true, 1, 0, Side::Player, &w, &mut nodes);
    assert_eq!(nodes, 3);
    assert_eq!(v, 7.0);
}

#[test]
fn terminal_state_is_evaluated_directly() {
    let mut state = two_corners_left();
    let pc = id(&state, "Pc");
    let ow = id(&state, "Ow");
    state.apply_move(Move { card_id: pc, position: 1 }).unwrap();
    state.apply_move(Move { card_id: ow, position: 3 }).unwrap();
    assert!(state.game_over());

    let w = EvalWeights::default();
    let mut nodes = 0u64;
    let v = minimax(&state, true, 1, 9, Side::Player, &w, &mut nodes);
    assert_eq!(nodes, 1);
    assert_eq!(v, evaluate(&state, Side::Player, &w));

    let res = best_move(&state, &SearchConfig::default());
    assert!(res.best_move.is_none(), "no best move at terminal");
    assert_eq!(res.score, f64::NEG_INFINITY);
    assert_eq!(res.nodes, 0);
}

#[test]
fn picks_the_capturing_card() {
    let mut b = GameState::builder(Side::Player);
    b.hand_card(Side::Player, card("Weak", 1, 1, 1, 1)).unwrap();
    b.hand_card(Side::Player, card("Strong", 9, 9, 9, 9)).unwrap();
    b.board_card(Side::Opponent, card("Target", 5, 5, 5, 5), 4).unwrap();
    let state = b.build();

    for depth in [1, 2, 9] {
        let res = best_move(&state, &score_only(depth));
        let mv = res.best_move.expect("a move exists");
        assert_eq!(mv.card_id, id(&state, "Strong"), "depth {depth}");
        assert_eq!(mv.position, 1, "position 1 sits below the target");
    }
}

#[test]
fn ties_keep_the_first_move_seen() {
    // Identical cards, one slot left: every move scores the same.
    let mut b = GameState::builder(Side::Player);
    b.hand_card(Side::Player, card("First", 5, 5, 5, 5)).unwrap();
    b.hand_card(Side::Player, card("Second", 5, 5, 5, 5)).unwrap();
    for (i, pos) in [1u8, 2, 3, 4, 6, 7, 8, 9].into_iter().enumerate() {
        let owner = if i % 2 == 0 { Side::Player } else { Side::Opponent };
        b.board_card(owner, card(&format!("B{i}"), 5, 5, 5, 5), pos).unwrap();
    }
    let state = b.build();

    let res = best_move(&state, &SearchConfig::with_depth(3));
    assert_eq!(
        res.best_move,
        Some(Move { card_id: id(&state, "First"), position: 5 })
    );
}

#[test]
fn ties_prefer_the_lower_position_over_the_earlier_card() {
    // Positions 1 and 9 open. "Lefty" captures only from 9, "Righty" only
    // from 1, so Lefty@9 and Righty@1 tie. Moves are enumerated position by
    // position, so Righty@1 is seen first.
    let mut b = GameState::builder(Side::Player);
    b.hand_card(Side::Player, card("Lefty", 1, 9, 1, 1)).unwrap();
    b.hand_card(Side::Player, card("Righty", 1, 1, 9, 1)).unwrap();
    b.board_card(Side::Opponent, card("O2", 5, 5, 5, 5), 2).unwrap();
    b.board_card(Side::Opponent, card("O8", 5, 5, 5, 5), 8).unwrap();
    for (i, pos) in [3u8, 4, 5, 6, 7].into_iter().enumerate() {
        b.board_card(Side::Player, card(&format!("P{i}"), 5, 5, 5, 5), pos).unwrap();
    }
    let state = b.build();

    let res = best_move(&state, &score_only(1));
    assert_eq!(
        res.best_move,
        Some(Move { card_id: id(&state, "Righty"), position: 1 })
    );
    assert_eq!(res.score, 6.0);
}

#[test]
fn first_reply_ply_is_maximized() {
    // After the Player's move the Opponent replies, and that ply is maximized
    // for the Player: the Opponent's capturing reply is never assumed.
    let state = two_corners_left();
    let res = best_move(&state, &score_only(9));
    assert_eq!(
        res.best_move,
        Some(Move { card_id: id(&state, "Pc"), position: 1 })
    );
    // 8 Player cells vs 1 Opponent cell, as if the weak reply were played
    assert_eq!(res.score, 7.0);
}

#[test]
fn node_count_covers_every_explored_state() {
    let state = two_corners_left();
    // 2 root moves, each followed by 2 replies that end the game
    assert_eq!(best_move(&state, &score_only(9)).nodes, 2 * (1 + 2));
    // Depth 1 evaluates right after the root move
    assert_eq!(best_move(&state, &score_only(1)).nodes, 2);
}

#[test]
fn out_of_cards_is_a_cutoff() {
    // Board not full but the side to move has nothing to play.
    let mut b = GameState::builder(Side::Player);
    b.hand_card(Side::Player, card("Only", 3, 3, 3, 3)).unwrap();
    let state = b.build();
    let res = best_move(&state, &score_only(9));
    assert!(res.best_move.is_some());
    assert_eq!(res.score, 1.0);
    assert_eq!(res.nodes, 9);
}

#[test]
fn solver_determinism_same_state_same_move_and_score() {
    let state = opening();
    let config = SearchConfig::with_depth(2);
    let res1 = best_move(&state, &config);
    let res2 = best_move(&state, &config);
    assert_eq!(res1, res2);
    assert!(res1.best_move.is_some());
}

#[test]
fn observer_sees_every_root_move_in_order() {
    let state = two_corners_left();
    let mut obs = RecordingObserver::default();
    let res = best_move_with_observer(&state, &score_only(9), &mut obs);

    let seen: Vec<Move> = obs.root_moves.iter().map(|(mv, _)| *mv).collect();
    assert_eq!(seen, state.next_possible_moves());
    let best_seen = obs
        .root_moves
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(best_seen, res.score);
    assert_eq!(obs.completed, Some(res));
}

#[test]
fn search_does_not_touch_the_root() {
    let state = two_corners_left();
    let before = state.clone();
    let _ = best_move(&state, &score_only(9));
    assert_eq!(state.board(), before.board());
    assert_eq!(state.hand(Side::Opponent), before.hand(Side::Opponent));
    assert_eq!(state.score(Side::Player), before.score(Side::Player));
}
