//! Ship kinds and straight-line placements.

use core::fmt;

use crate::config::{LARGE_GLYPH, SMALL_GLYPH};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship. Each kind has a fixed length and display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Small,
    Large,
}

impl ShipKind {
    /// All kinds, longest first.
    pub const ALL: [ShipKind; 2] = [ShipKind::Large, ShipKind::Small];

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Small => 2,
            ShipKind::Large => 3,
        }
    }

    /// Glyph drawn for a segment of this kind.
    pub const fn glyph(self) -> &'static str {
        match self {
            ShipKind::Small => SMALL_GLYPH,
            ShipKind::Large => LARGE_GLYPH,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Small => "small",
            ShipKind::Large => "large",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ship (length {})", self.name(), self.length())
    }
}

/// A candidate or committed ship position: kind, anchor cell and orientation.
///
/// The anchor is the top-left end of the run; horizontal ships extend towards
/// higher columns, vertical ships towards higher rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub kind: ShipKind,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            kind,
            row,
            col,
            orientation,
        }
    }

    /// Cells covered by the ship, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.kind.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Returns `true` if every cell lies inside a `size`×`size` grid.
    pub fn fits(&self, size: usize) -> bool {
        let len = self.kind.length();
        match self.orientation {
            Orientation::Horizontal => self.row < size && self.col < size && len <= size - self.col,
            Orientation::Vertical => self.row < size && self.col < size && len <= size - self.row,
        }
    }
}
