use rand::Rng;

use crate::{
    board::{Board, Grid},
    common::{GameError, GuessResult},
    config::Fleet,
    coord::parse_coord,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Outcome of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub row: usize,
    pub col: usize,
    pub result: GuessResult,
    /// Whether every ship is sunk after applying the guess.
    pub all_sunk: bool,
}

/// Core game logic for one playthrough: owns the board and counts guesses.
pub struct GameEngine {
    fleet: Fleet,
    board: Board,
    guesses: usize,
}

impl GameEngine {
    /// Resolve a raw size selection to its fleet.
    pub fn configure(raw: &str) -> Result<Fleet, GameError> {
        raw.trim()
            .parse::<usize>()
            .ok()
            .and_then(Fleet::for_size)
            .ok_or(GameError::InvalidSize)
    }

    /// Create a board for `fleet` and place its ships at random.
    pub fn start<R: Rng>(fleet: Fleet, rng: &mut R) -> Result<Self, GameError> {
        let mut board = Board::new(fleet.size);
        board.place_ships(rng, &fleet)?;
        log::info!(
            "new {0}x{0} game: {1} small, {2} large",
            fleet.size,
            fleet.small,
            fleet.large
        );
        Ok(Self::from_board(fleet, board))
    }

    /// Wrap a board whose ships were already placed.
    pub fn from_board(fleet: Fleet, board: Board) -> Self {
        Self {
            fleet,
            board,
            guesses: 0,
        }
    }

    pub fn fleet(&self) -> Fleet {
        self.fleet
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of guesses that reached the board, repeats included.
    pub fn guess_count(&self) -> usize {
        self.guesses
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Parse and apply a guess such as `"B3"`. Malformed or off-board input
    /// is rejected before the board is touched.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, GameError> {
        if self.status() == GameStatus::Won {
            return Err(GameError::AlreadyEnded);
        }
        let (row, col) = parse_coord(raw, self.board.size())?;
        let result = self.board.guess(row, col)?;
        self.guesses += 1;
        let all_sunk = self.board.all_sunk();
        log::debug!("guess {:?} -> {:?} (all sunk: {})", raw.trim(), result, all_sunk);
        Ok(GuessReport {
            row,
            col,
            result,
            all_sunk,
        })
    }

    /// Glyph grid for the output sink.
    pub fn render(&self, reveal_all: bool) -> Grid {
        self.board.render(reveal_all)
    }
}
