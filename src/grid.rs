//! Grid geometry: cell positions, unit direction vectors and the finished letter grid.

use std::fmt;

/// Cell coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along `direction`, staying inside a `size`×`size` grid.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row as isize + steps * isize::from(direction.d_row);
        let col = self.col as isize + steps * isize::from(direction.d_col);
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit step between neighbouring cells. Never the zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    d_row: i8,
    d_col: i8,
}

impl Direction {
    pub const RIGHT: Self = Self { d_row: 0, d_col: 1 };
    pub const LEFT: Self = Self { d_row: 0, d_col: -1 };
    pub const DOWN: Self = Self { d_row: 1, d_col: 0 };
    pub const UP: Self = Self { d_row: -1, d_col: 0 };
    pub const DOWN_RIGHT: Self = Self { d_row: 1, d_col: 1 };
    pub const DOWN_LEFT: Self = Self { d_row: 1, d_col: -1 };
    pub const UP_RIGHT: Self = Self { d_row: -1, d_col: 1 };
    pub const UP_LEFT: Self = Self { d_row: -1, d_col: -1 };

    #[must_use]
    pub fn new(d_row: i8, d_col: i8) -> Option<Self> {
        let unit = |d: i8| (-1..=1).contains(&d);
        (unit(d_row) && unit(d_col) && (d_row, d_col) != (0, 0)).then_some(Self { d_row, d_col })
    }

    /// Unit direction of the straight line from `from` to `to`, with the number of steps.
    ///
    /// Returns `None` for a zero-length line or any slope other than horizontal, vertical
    /// or exactly 45 degrees.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<(Self, usize)> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        if dr == 0 && dc == 0 {
            return None;
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return None;
        }
        let direction = Self {
            d_row: dr.signum() as i8,
            d_col: dc.signum() as i8,
        };
        Some((direction, dr.unsigned_abs().max(dc.unsigned_abs())))
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }
}

/// Square grid of uppercase letters with no empty cells. The default grid is 0×0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from row-major letters. `cells.len()` must equal `size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Parse a grid from equal-length rows of ASCII letters (lowercase is uppercased).
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size || !row.chars().all(|c| c.is_ascii_alphabetic()) {
                return None;
            }
            cells.extend(row.chars().map(|c| c.to_ascii_uppercase()));
        }
        Some(Self { size, cells })
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.size + pos.col])
    }

    /// Letters along `positions`, or `None` if any position is off the grid.
    #[must_use]
    pub fn spell(&self, positions: &[Position]) -> Option<String> {
        positions.iter().map(|&pos| self.get(pos)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics; an empty grid has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
