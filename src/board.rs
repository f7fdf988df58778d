//! Game board: a square grid of cells, ship placement and guess resolution.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use core::fmt;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{BoardError, GuessResult};
use crate::config::{Fleet, BLANK_GLYPH, MAX_PLACEMENT_ATTEMPTS, MISS_GLYPH};
use crate::ship::{Orientation, Placement, ShipKind};

/// Rendered board: one glyph per cell, row-major.
pub type Grid = Vec<Vec<&'static str>>;

/// What physically sits in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Empty,
    ShipSegment(ShipKind),
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    occupant: Occupant,
    revealed: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        occupant: Occupant::Empty,
        revealed: false,
    };

    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_ship(&self) -> bool {
        matches!(self.occupant, Occupant::ShipSegment(_))
    }

    /// Glyph to show for this cell. Unrevealed cells are blank unless
    /// `reveal_all` is set, in which case ship segments show their glyph.
    pub fn display_value(&self, reveal_all: bool) -> &'static str {
        match (self.occupant, self.revealed) {
            (Occupant::ShipSegment(kind), true) => kind.glyph(),
            (Occupant::Empty, true) => MISS_GLYPH,
            (Occupant::ShipSegment(kind), false) if reveal_all => kind.glyph(),
            (_, false) => BLANK_GLYPH,
        }
    }
}

/// Position of a board in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// Freshly created, no ships.
    Empty,
    /// Ships placed, no guesses yet.
    Populated,
    /// At least one guess made, ships remain.
    Playing,
    /// Every ship cell revealed.
    Won,
}

/// Square grid of cells plus the record of committed placements.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    placements: Vec<Placement>,
    locked: bool,
}

impl Board {
    /// Create an empty `size`×`size` board. `size` is validated by the caller.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::EMPTY; size * size],
            placements: Vec::new(),
            locked: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Ships committed so far, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Iterator over `((row, col), cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / self.size, i % self.size), cell))
    }

    /// Returns `true` if `placement` fits on the grid without touching a ship.
    pub fn can_place(&self, placement: &Placement) -> bool {
        placement.fits(self.size)
            && placement
                .cells()
                .all(|(r, c)| self.cell(r, c).is_some_and(|cell| !cell.is_ship()))
    }

    /// Commit a single ship. On error the grid is left unchanged.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        if self.locked {
            return Err(BoardError::PlacementClosed);
        }
        if !placement.fits(self.size) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.can_place(&placement) {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in placement.cells() {
            self.cells[r * self.size + c].occupant = Occupant::ShipSegment(placement.kind);
        }
        self.placements.push(placement);
        Ok(())
    }

    /// Every valid position for a ship of `kind` on the current grid.
    pub fn valid_placements(&self, kind: ShipKind) -> impl Iterator<Item = Placement> + '_ {
        let size = self.size;
        (0..size * size)
            .flat_map(move |i| {
                [Orientation::Horizontal, Orientation::Vertical]
                    .map(|o| Placement::new(kind, i / size, i % size, o))
            })
            .filter(move |p| self.can_place(p))
    }

    /// Pick a random free position for a ship of `kind`.
    ///
    /// Samples a uniformly random anchor and orientation up to
    /// [`MAX_PLACEMENT_ATTEMPTS`] times, then chooses uniformly among all
    /// remaining valid positions.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<Placement, BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..self.size);
            let col = rng.random_range(0..self.size);
            let candidate = Placement::new(kind, row, col, orientation);
            if self.can_place(&candidate) {
                return Ok(candidate);
            }
        }
        log::debug!(
            "no position found for {} after {} samples, scanning",
            kind,
            MAX_PLACEMENT_ATTEMPTS
        );
        let candidates: Vec<Placement> = self.valid_placements(kind).collect();
        candidates
            .choose(rng)
            .copied()
            .ok_or(BoardError::PlacementFailed { kind })
    }

    /// Randomly place every ship of `fleet`, longest first.
    pub fn place_ships<R: Rng>(
        &mut self,
        rng: &mut R,
        fleet: &Fleet,
    ) -> Result<(), BoardError> {
        for kind in fleet.ships() {
            let placement = self.random_placement(rng, kind)?;
            log::debug!(
                "placed {} at ({}, {}) {:?}",
                kind,
                placement.row,
                placement.col,
                placement.orientation
            );
            self.place(placement)?;
        }
        Ok(())
    }

    /// Resolve a guess at (row, col). Only the `revealed` flag of that cell
    /// can change; a repeated guess changes nothing.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::InvalidIndex { row, col });
        }
        self.locked = true;
        let cell = &mut self.cells[row * self.size + col];
        if cell.revealed {
            return Ok(GuessResult::AlreadyGuessed);
        }
        cell.revealed = true;
        Ok(match cell.occupant {
            Occupant::Empty => GuessResult::Miss,
            Occupant::ShipSegment(kind) => GuessResult::Hit(kind),
        })
    }

    /// Returns `true` when every ship cell has been revealed.
    pub fn all_sunk(&self) -> bool {
        self.cells.iter().all(|c| !c.is_ship() || c.revealed)
    }

    /// Returns `true` when every ship of `kind` is fully revealed. Kinds
    /// absent from the board are never sunk.
    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        let mut segments = self
            .cells
            .iter()
            .filter(|c| c.occupant == Occupant::ShipSegment(kind))
            .peekable();
        segments.peek().is_some() && segments.all(|c| c.revealed)
    }

    /// Total ship segments on the board.
    pub fn ship_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_ship()).count()
    }

    /// Ship segments not yet revealed.
    pub fn remaining_ship_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.is_ship() && !c.revealed)
            .count()
    }

    pub fn phase(&self) -> BoardPhase {
        if !self.locked {
            if self.placements.is_empty() {
                BoardPhase::Empty
            } else {
                BoardPhase::Populated
            }
        } else if self.all_sunk() {
            BoardPhase::Won
        } else {
            BoardPhase::Playing
        }
    }

    /// Glyph grid for display; `reveal_all` shows unrevealed ships.
    pub fn render(&self, reveal_all: bool) -> Grid {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.display_value(reveal_all)).collect())
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, placements: {:?} }}", self.size, self.placements)?;
        for row in self.render(true) {
            for glyph in row {
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
