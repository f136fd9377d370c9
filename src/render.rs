use std::fmt;

use crate::state::GameState;
use crate::types::Side;

/// A card (or empty cell) as it appears in a row of 4-line blocks.
struct Cell<'a> {
    symbol: &'a str,
    owner: Side,
    sides: [u8; 4], // top, left, right, bottom
}

/// Strength 10 is drawn as `A` to keep every block the same width.
fn value_char(v: u8) -> char {
    match v {
        10 => 'A',
        _ => char::from_digit(u32::from(v), 10).unwrap_or('?'),
    }
}

fn render_row(cells: &[Option<Cell<'_>>]) -> String {
    let mut lines = [String::new(), String::new(), String::new(), String::new()];
    for cell in cells {
        match cell {
            None => {
                lines[0].push_str("       ");
                lines[1].push_str(" |   | ");
                lines[2].push_str(" |   | ");
                lines[3].push_str(" |   | ");
            }
            Some(c) => {
                let [top, left, right, bottom] = c.sides.map(value_char);
                lines[0].push_str(&format!("  {}-{}  ", c.symbol, c.owner));
                lines[1].push_str(&format!(" | {top} | "));
                lines[2].push_str(&format!(" |{left} {right}| "));
                lines[3].push_str(&format!(" | {bottom} | "));
            }
        }
    }
    lines.join("\n")
}

fn hand_cells(state: &GameState, side: Side) -> Vec<Option<Cell<'_>>> {
    state
        .hand(side)
        .iter()
        .filter_map(|id| state.card(id))
        .map(|c| {
            Some(Cell {
                symbol: &c.symbol,
                owner: side,
                sides: [c.top, c.left, c.right, c.bottom],
            })
        })
        .collect()
}

fn board_cells(state: &GameState, row: [u8; 3]) -> Vec<Option<Cell<'_>>> {
    row.iter()
        .map(|&pos| {
            let slot = state.board().get(pos)?;
            let c = state.card(slot.card_id)?;
            Some(Cell {
                symbol: &c.symbol,
                owner: slot.owner,
                sides: [c.top, c.left, c.right, c.bottom],
            })
        })
        .collect()
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player (P) Cards:")?;
        writeln!(f, "{}\n", render_row(&hand_cells(self, Side::Player)))?;
        writeln!(f, "Opponent (O) Cards:")?;
        writeln!(f, "{}\n", render_row(&hand_cells(self, Side::Opponent)))?;
        writeln!(f, "Board:")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "Current Player: {}  |  Points: P = {}, O = {}",
            self.current_player(),
            self.score(Side::Player),
            self.score(Side::Opponent)
        )?;
        for row in [[7, 8, 9], [4, 5, 6], [1, 2, 3]] {
            writeln!(f, "{}\n", render_row(&board_cells(self, row)))?;
        }
        Ok(())
    }
}
