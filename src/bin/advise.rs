use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use triadsage::{
    best_move, best_move_with_observer, gamestate_from_file, DebugJournal, EvalWeights, GameState,
    Move, SearchConfig, SearchResult, Side,
};

#[derive(Debug, Parser)]
#[command(name = "advise", about = "Recommends the best next move for a Triple Triad position")]
struct Args {
    /// Game state file (JSON)
    #[arg(long, value_parser = existing_file)]
    gamestate: PathBuf,

    /// Max tree depth of the minimax search (0 searches to the end of the game)
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Write a debug journal of every search to a timestamped file
    #[arg(long)]
    debug: bool,

    /// Directory for the debug journal
    #[arg(long, default_value = ".")]
    debug_dir: PathBuf,

    /// Weight of the corner/edge ownership heuristic
    #[arg(long, default_value_t = EvalWeights::default().positional)]
    positional_weight: f64,

    /// Weight of the remaining-hand-strength heuristic
    #[arg(long, default_value_t = EvalWeights::default().hand_power)]
    hand_weight: f64,

    /// Print the recommendation for the loaded position and exit
    #[arg(long)]
    once: bool,

    /// With --once, print the recommendation as JSON
    #[arg(long, requires = "once")]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct Recommendation {
    card: Option<String>,
    position: Option<u8>,
    score: Option<f64>,
    nodes: u64,
    depth: u8,
}

enum Input {
    Play(Move),
    Undo,
    Closed,
}

fn existing_file(s: &str) -> Result<PathBuf, String> {
    let p = PathBuf::from(s);
    if p.is_file() {
        Ok(p)
    } else {
        Err(format!("The file {s} does not exist!"))
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn search(
    state: &GameState,
    config: &SearchConfig,
    journal: Option<&mut DebugJournal<BufWriter<File>>>,
) -> SearchResult {
    match journal {
        Some(j) => best_move_with_observer(state, config, j),
        None => best_move(state, config),
    }
}

fn finish_journal(journal: Option<DebugJournal<BufWriter<File>>>) {
    if let Some(j) = journal {
        if let Err(e) = j.finish() {
            warn!("debug journal incomplete: {e}");
        }
    }
}

fn describe(state: &GameState, result: &SearchResult) -> String {
    match result.best_move {
        Some(mv) => format!("{}, Score = {}", state.describe_move(mv), result.score),
        None => "None".to_string(),
    }
}

fn prompt(message: &str) -> io::Result<()> {
    println!("{message}");
    io::stdout().flush()
}

/// Read a card symbol and a position for the side to move.
/// Re-prompts until the input is playable; `undo` is accepted in place of a card.
fn read_move(state: &GameState, lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Input> {
    let side = state.current_player();
    let symbols: Vec<String> = state
        .hand(side)
        .iter()
        .filter_map(|id| state.card(id).map(|c| c.symbol.clone()))
        .collect();

    let card_id = loop {
        prompt(&format!("Choose a card to place (Available = {symbols:?}), or 'undo':"))?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(Input::Closed);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("undo") {
            return Ok(Input::Undo);
        }
        match state.hand_card_by_symbol(line) {
            Some(id) => break id,
            None => println!("Invalid input... try again."),
        }
    };

    let available = state.board().empty_positions();
    let position = loop {
        prompt(&format!("Choose a position: (Available = {available:?})"))?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(Input::Closed);
        };
        match line.trim().parse::<u8>() {
            Ok(p) if available.contains(&p) => break p,
            _ => println!("Invalid input... try again."),
        }
    };

    Ok(Input::Play(Move { card_id, position }))
}

fn run_once(
    state: &GameState,
    config: &SearchConfig,
    json: bool,
    journal: Option<&mut DebugJournal<BufWriter<File>>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = search(state, config, journal);
    if json {
        let rec = Recommendation {
            card: result
                .best_move
                .and_then(|mv| state.card(mv.card_id).map(|c| c.symbol.clone())),
            position: result.best_move.map(|mv| mv.position),
            score: result.best_move.map(|_| result.score),
            nodes: result.nodes,
            depth: result.max_depth,
        };
        println!("{}", serde_json::to_string(&rec)?);
    } else {
        println!("{state}");
        println!("* Best Move = ({})", describe(state, &result));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut state = gamestate_from_file(&args.gamestate)
        .map_err(|e| format!("Game state load error: {e}"))?;
    let weights = EvalWeights::new(args.positional_weight, args.hand_weight);
    info!(path = %args.gamestate.display(), depth = args.depth, "loaded game state");

    let mut journal = if args.debug {
        let (mut j, path) = DebugJournal::<BufWriter<File>>::create_in(&args.debug_dir)?;
        info!(path = %path.display(), "writing debug journal");
        j.log_state("Initial Game State:", &state);
        Some(j)
    } else {
        None
    };

    if args.once {
        let config = SearchConfig {
            max_depth: args.depth,
            weights,
        };
        let outcome = run_once(&state, &config, args.json, journal.as_mut());
        finish_journal(journal);
        return outcome;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut previous: Option<GameState> = None;
    let mut turn_count: u8 = 0;

    while !state.game_over() {
        println!("{state}");
        if let Some(j) = journal.as_mut() {
            j.log_state(&format!("Turn {turn_count}"), &state);
        }

        let side = state.current_player();
        if state.next_possible_moves().is_empty() {
            println!("Player {side} has no cards left to play.");
            break;
        }

        if side == Side::Player {
            println!("Determining best move...");
            let config = SearchConfig {
                max_depth: args.depth.saturating_add(turn_count),
                weights,
            };
            let result = search(&state, &config, journal.as_mut());
            println!("* Best Move = ({})", describe(&state, &result));
        }

        println!("Player {side}: Make a move:");
        match read_move(&state, &mut lines)? {
            Input::Play(mv) => {
                let next = triadsage::apply_move(&state, mv)?;
                previous = Some(std::mem::replace(&mut state, next));
                turn_count = turn_count.saturating_add(1);
            }
            Input::Undo => match previous.take() {
                Some(prev) => {
                    state = prev;
                    turn_count = turn_count.saturating_sub(1);
                    println!("Undid last move.");
                }
                None => println!("Nothing to undo."),
            },
            Input::Closed => {
                println!("Input closed; exiting.");
                break;
            }
        }
    }

    if state.game_over() {
        println!("{state}");
        println!(
            "Winner is {}. Final score: P = {}, O = {}",
            state.winner(),
            state.score(Side::Player),
            state.score(Side::Opponent)
        );
    }

    finish_journal(journal);
    Ok(())
}
