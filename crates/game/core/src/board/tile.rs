/// Position of a cell relative to the board edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum TileKind {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl TileKind {
    /// A one-cell board has no edges to speak of and reports `Center`.
    pub fn classify(row: usize, col: usize, size: usize) -> Self {
        if size <= 1 {
            return Self::Center;
        }
        let last = size - 1;
        match (row, col) {
            (0, 0) => Self::TopLeft,
            (0, c) if c == last => Self::TopRight,
            (0, _) => Self::Top,
            (r, 0) if r == last => Self::BottomLeft,
            (r, c) if r == last && c == last => Self::BottomRight,
            (r, _) if r == last => Self::Bottom,
            (_, 0) => Self::Left,
            (_, c) if c == last => Self::Right,
            _ => Self::Center,
        }
    }
}
