//! Straight-line selection and matching against placed words.

use crate::generator::Placement;
use crate::grid::{Direction, Grid, Position};

/// The player's current drag path, always starting at the anchor cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Position>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `anchor`.
    #[must_use]
    pub fn starting_at(anchor: Position) -> Self {
        Self {
            cells: vec![anchor],
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Redraw the selection as the straight line from `anchor` to `to` on a `size`×`size` grid.
    ///
    /// The line is rebuilt from the anchor every time, so it can shrink or swing round.
    /// Zero-length, non-straight and off-grid lines leave the selection as it was. Returns
    /// whether the selection changed.
    pub fn extend(&mut self, anchor: Position, to: Position, size: usize) -> bool {
        match line_between(anchor, to, size) {
            Some(cells) => {
                self.cells = cells;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

/// Every lattice point from `from` to `to` inclusive.
///
/// `None` if the line is not straight or either end lies outside a `size`×`size` grid.
#[must_use]
pub fn line_between(from: Position, to: Position, size: usize) -> Option<Vec<Position>> {
    let inside = |pos: Position| pos.row < size && pos.col < size;
    if !inside(from) || !inside(to) {
        return None;
    }
    let (direction, steps) = Direction::between(from, to)?;
    (0..=steps)
        .map(|i| from.offset(direction, i, size))
        .collect()
}

/// Mark the first unfound placement spelled by `cells` (either way round) as found.
///
/// Returns its index. Already-found placements never match again, so repeated calls with
/// the same cells are inert.
pub fn check_match(cells: &[Position], grid: &Grid, placements: &mut [Placement]) -> Option<usize> {
    let forward = grid.spell(cells)?;
    if forward.is_empty() {
        return None;
    }
    let reversed: String = forward.chars().rev().collect();
    let index = placements
        .iter()
        .position(|p| !p.found && (p.word == forward || p.word == reversed))?;
    placements[index].found = true;
    Some(index)
}
