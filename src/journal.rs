use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::solver::{SearchObserver, SearchResult};
use crate::state::{GameState, Move};

/// Plain-text debug journal of a session and the searches run in it.
///
/// Search callbacks cannot return errors, so the first write failure is kept
/// and reported by [`DebugJournal::finish`]; later writes are skipped.
pub struct DebugJournal<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl DebugJournal<BufWriter<File>> {
    /// Open (append) `debug_YYYYMMDD_HHMMSS.txt` inside `dir`.
    pub fn create_in(dir: &Path) -> io::Result<(Self, PathBuf)> {
        let name = format!("debug_{}.txt", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        let path = dir.join(name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((Self::new(BufWriter::new(file)), path))
    }
}

impl<W: Write> DebugJournal<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn log(&mut self, message: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{message}") {
            warn!("debug journal write failed: {e}");
            self.error = Some(e);
        }
    }

    pub fn log_state(&mut self, heading: &str, state: &GameState) {
        self.log(heading);
        self.log(&state.to_string());
    }

    /// Flush and hand back the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> SearchObserver for DebugJournal<W> {
    fn on_root_move(&mut self, after: &GameState, _mv: Move, score: f64) {
        self.log_state("Possible Move:", after);
        self.log(&format!("Score = {score}"));
    }

    fn on_search_complete(&mut self, root: &GameState, result: &SearchResult) {
        let best = match result.best_move {
            Some(mv) => root.describe_move(mv),
            None => "None".to_string(),
        };
        self.log(&format!(
            "Best Move = {best} (Score = {}, nodes = {}, depth = {})",
            result.score, result.nodes, result.max_depth
        ));
    }
}
