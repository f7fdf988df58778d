use crate::ship::ShipKind;

/// Board sizes a session may be started with.
pub const SUPPORTED_SIZES: [usize; 3] = [4, 5, 6];

/// Random samples tried per ship before falling back to an exhaustive scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;

pub const BLANK_GLYPH: &str = "-";
pub const MISS_GLYPH: &str = "❌";
pub const SMALL_GLYPH: &str = "🟠";
pub const LARGE_GLYPH: &str = "🔵";

/// Ship counts for one board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    pub size: usize,
    pub small: usize,
    pub large: usize,
}

impl Fleet {
    /// Fixed fleet for a supported board size, `None` for any other size.
    pub const fn for_size(size: usize) -> Option<Self> {
        let (small, large) = match size {
            4 => (1, 1),
            5 => (2, 1),
            6 => (2, 2),
            _ => return None,
        };
        Some(Self { size, small, large })
    }

    /// Number of ships of `kind` in the fleet.
    pub const fn count(&self, kind: ShipKind) -> usize {
        match kind {
            ShipKind::Small => self.small,
            ShipKind::Large => self.large,
        }
    }

    /// Every ship instance to place, longest kinds first.
    pub fn ships(&self) -> impl Iterator<Item = ShipKind> + '_ {
        ShipKind::ALL
            .into_iter()
            .flat_map(move |kind| core::iter::repeat(kind).take(self.count(kind)))
    }

    /// Total ship segments on a board populated with this fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.ships().map(ShipKind::length).sum()
    }
}
