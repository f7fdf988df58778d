#![cfg(feature = "std")]

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{board::Board, coord::coord_to_string, session::InputSource};

/// Automated player. Fires next to known hits first (target mode) and at a
/// random unrevealed cell otherwise (hunt mode). Only revealed cells are
/// inspected.
pub struct AiPlayer<R> {
    rng: R,
    size: usize,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R, size: usize) -> Self {
        Self { rng, size }
    }

    /// Choose the next target, or `None` once every cell is revealed.
    pub fn select_target(&mut self, board: &Board) -> Option<(usize, usize)> {
        let unknown = |r: usize, c: usize| board.cell(r, c).is_some_and(|cell| !cell.is_revealed());

        let mut targets: Vec<(usize, usize)> = Vec::new();
        for ((r, c), cell) in board.cells() {
            if !(cell.is_revealed() && cell.is_ship()) {
                continue;
            }
            let neighbours = [
                r.checked_sub(1).map(|r| (r, c)),
                Some((r + 1, c)),
                c.checked_sub(1).map(|c| (r, c)),
                Some((r, c + 1)),
            ];
            for (nr, nc) in neighbours.into_iter().flatten() {
                if unknown(nr, nc) && !targets.contains(&(nr, nc)) {
                    targets.push((nr, nc));
                }
            }
        }
        if targets.is_empty() {
            targets = board
                .cells()
                .filter(|(_, cell)| !cell.is_revealed())
                .map(|(pos, _)| pos)
                .collect();
        }
        targets.choose(&mut self.rng).copied()
    }
}

impl<R: Rng> InputSource for AiPlayer<R> {
    fn next_size(&mut self) -> anyhow::Result<Option<String>> {
        Ok(Some(self.size.to_string()))
    }

    fn next_guess(&mut self, board: &Board) -> anyhow::Result<Option<String>> {
        let guess = self.select_target(board).map(|(r, c)| coord_to_string(r, c));
        if let Some(g) = &guess {
            log::debug!("ai fires at {}", g);
        }
        Ok(guess)
    }
}
