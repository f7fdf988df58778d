//! Common types: guess outcomes and the error enums of the engine.

use core::fmt;

use crate::ship::ShipKind;

/// Result of resolving a guess against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Cell was already revealed; nothing changed.
    AlreadyGuessed,
    /// Cell held no ship and is now revealed.
    Miss,
    /// Cell held a segment of the given kind and is now revealed.
    Hit(ShipKind),
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Specified cell is outside the grid.
    InvalidIndex { row: usize, col: usize },
    /// Ship placement extends past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Placement attempted after guessing started.
    PlacementClosed,
    /// No valid position is left for a ship of this kind.
    PlacementFailed { kind: ShipKind },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex { row, col } => {
                write!(f, "Index is out of range: row={}, col={}", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::PlacementClosed => write!(f, "Ships cannot be placed once guessing started"),
            BoardError::PlacementFailed { kind } => {
                write!(f, "Unable to place {}: no free position left", kind)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Why a coordinate string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    Empty,
    /// First character is not an ASCII letter.
    InvalidRow(char),
    /// Letter maps past the last row.
    RowOutOfRange(char),
    /// No digits after the letter.
    MissingColumn,
    /// Trailing text is not a plain number.
    InvalidColumn,
    /// Column number is 0 or past the last column.
    ColumnOutOfRange(usize),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "empty input"),
            CoordError::InvalidRow(ch) => write!(f, "'{}' is not a row letter", ch),
            CoordError::RowOutOfRange(ch) => write!(f, "row '{}' is off the board", ch),
            CoordError::MissingColumn => write!(f, "missing column number"),
            CoordError::InvalidColumn => write!(f, "column must be a number"),
            CoordError::ColumnOutOfRange(n) => write!(f, "column {} is off the board", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

/// Errors surfaced by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Requested board size is not one of the supported sizes.
    InvalidSize,
    /// Guess text could not be turned into a cell on this board.
    InvalidCoordinate(CoordError),
    /// Guess submitted after every ship was sunk.
    AlreadyEnded,
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<CoordError> for GameError {
    fn from(err: CoordError) -> Self {
        GameError::InvalidCoordinate(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSize => write!(f, "Invalid size. Choose 4, 5, or 6."),
            GameError::InvalidCoordinate(e) => write!(f, "Invalid coordinate: {}", e),
            GameError::AlreadyEnded => write!(f, "Game already ended, no new guesses are accepted"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
