use triadsage::{best_move_with_observer, gamestate_from_file, Card, DebugJournal, GameState, SearchConfig, Side};

fn endgame() -> GameState {
    gamestate_from_file("tests/data/endgame.json").expect("fixture loads")
}

#[test]
fn render_shows_hands_board_and_points() {
    let text = endgame().to_string();
    assert!(text.starts_with("Player (P) Cards:"));
    assert!(text.contains("Opponent (O) Cards:"));
    assert!(text.contains("Current Player: P  |  Points: P = 4, O = 3"));
    assert!(text.contains("  X-P  "));
    assert!(text.contains("  Y-O  "));
    assert!(text.contains("  B8-O  "));

    // Top board row is 7 8 9, bottom row 1 2 3
    let top = text.find("B7-P").unwrap();
    let middle = text.find("B4-O").unwrap();
    let bottom = text.find("B2-O").unwrap();
    assert!(top < middle && middle < bottom);
}

#[test]
fn render_draws_ten_as_a() {
    let mut b = GameState::builder(Side::Player);
    b.board_card(Side::Player, Card::new("K", 10, 1, 10, 2).unwrap(), 5).unwrap();
    let text = b.build().to_string();
    assert!(text.contains(" | A | "));
    assert!(text.contains(" |1 A| "));
    assert!(text.contains(" | 2 | "));
}

#[test]
fn journal_records_each_root_move_and_the_result() {
    let state = endgame();
    let mut journal = DebugJournal::new(Vec::new());
    journal.log_state("Turn 0", &state);
    let res = best_move_with_observer(&state, &SearchConfig::default(), &mut journal);
    let bytes = journal.finish().expect("in-memory writes succeed");
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("Turn 0\n"));
    assert_eq!(text.matches("Possible Move:").count(), 2);
    assert_eq!(text.matches("Score = ").count(), 3);
    assert!(text.contains(&format!("Best Move = X@1 (Score = {}", res.score)));
}

#[test]
fn journal_create_in_uses_timestamped_name() {
    let dir = tempfile::tempdir().unwrap();
    let (mut journal, path) = DebugJournal::create_in(dir.path()).unwrap();
    journal.log("hello");
    journal.finish().unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("debug_") && name.ends_with(".txt"), "{name}");
    // debug_ + YYYYMMDD_HHMMSS + .txt
    assert_eq!(name.len(), "debug_".len() + 15 + ".txt".len());
    assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
}
