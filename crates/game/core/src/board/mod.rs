//! Pure grid geometry for a square, row-major board.
//!
//! Cells are addressed by a single index `row * N + col`. Range checks for
//! both movement and attacks use the Chebyshev metric, so diagonal steps
//! cost the same as orthogonal ones.

mod tile;

pub use tile::TileKind;

use crate::state::Position;

/// Which pair of edge columns a roster starts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BorderSide {
    /// The two left-most columns.
    First,
    /// The two right-most columns.
    Last,
}

/// Square board of side `size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
}

impl Board {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board (`N²`).
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub const fn contains(&self, position: Position) -> bool {
        position.index() < self.cell_count()
    }

    pub const fn row(&self, position: Position) -> usize {
        position.index() / self.size
    }

    pub const fn col(&self, position: Position) -> usize {
        position.index() % self.size
    }

    pub const fn at(&self, row: usize, col: usize) -> Position {
        Position::new(row * self.size + col)
    }

    /// Chebyshev distance between two cells.
    pub fn distance(&self, a: Position, b: Position) -> usize {
        let rows = self.row(a).abs_diff(self.row(b));
        let cols = self.col(a).abs_diff(self.col(b));
        rows.max(cols)
    }

    /// Cells of the two edge columns on `side`, two per row, in row order.
    pub fn border_columns(&self, side: BorderSide) -> Vec<Position> {
        let first_col = match side {
            BorderSide::First => 0,
            BorderSide::Last => self.size.saturating_sub(2),
        };
        (0..self.size)
            .flat_map(|row| [self.at(row, first_col), self.at(row, first_col + 1)])
            .collect()
    }

    /// Picks a destination at most `budget` steps from `from` on the straight
    /// line toward `to`.
    ///
    /// Step counts are tried from the largest allowed down to one; for each,
    /// the row/col delta is scaled, rounded and clamped to the board. The
    /// first candidate that is neither `from` nor occupied wins. Returns
    /// `from` when no candidate is free or the cells coincide.
    pub fn step_toward(
        &self,
        from: Position,
        to: Position,
        budget: usize,
        is_occupied: impl Fn(Position) -> bool,
    ) -> Position {
        let distance = self.distance(from, to);
        if distance == 0 || self.size == 0 {
            return from;
        }

        let (from_row, from_col) = (self.row(from) as isize, self.col(from) as isize);
        let delta_row = self.row(to) as isize - from_row;
        let delta_col = self.col(to) as isize - from_col;
        let last = self.size as isize - 1;

        for step in (1..=budget.min(distance)).rev() {
            let offset_row = scaled_offset(delta_row, distance, step);
            let offset_col = scaled_offset(delta_col, distance, step);

            let row = (from_row + offset_row).clamp(0, last) as usize;
            let col = (from_col + offset_col).clamp(0, last) as usize;
            let candidate = self.at(row, col);

            if candidate != from && !is_occupied(candidate) {
                return candidate;
            }
        }

        from
    }

    /// Edge/corner classification of a cell, used by surfaces to pick tiles.
    pub fn tile_kind(&self, position: Position) -> TileKind {
        TileKind::classify(self.row(position), self.col(position), self.size)
    }
}

/// `delta * step / distance` rounded to the nearest cell, halves toward +∞.
fn scaled_offset(delta: isize, distance: usize, step: usize) -> isize {
    let exact = delta as f64 / distance as f64 * step as f64;
    (exact + 0.5).floor() as isize
}
