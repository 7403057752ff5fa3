use crate::board::Board;
use crate::state::UnitTable;

/// Match configuration: board geometry, roster sizes, themes and the unit table.
///
/// Passed explicitly into the engine and the AI so independent matches never
/// share ambient tables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length `N` of the square board.
    pub board_size: usize,
    /// Units generated per roster at match start and on every new level.
    pub team_size: usize,
    /// Ordered theme names; clearing the last one wins the match.
    pub themes: Vec<String>,
    /// Static per-kind attributes.
    pub units: UnitTable,
}

impl GameConfig {
    // ===== gameplay constants =====
    pub const MIN_BOARD_SIZE: usize = 2;
    pub const DEFAULT_BOARD_SIZE: usize = 8;
    pub const DEFAULT_TEAM_SIZE: usize = 4;
    pub const DEFAULT_THEMES: [&'static str; 4] = ["prairie", "desert", "arctic", "mountain"];

    pub fn new() -> Self {
        Self {
            board_size: Self::DEFAULT_BOARD_SIZE,
            team_size: Self::DEFAULT_TEAM_SIZE,
            themes: Self::DEFAULT_THEMES.iter().map(|t| t.to_string()).collect(),
            units: UnitTable::standard(),
        }
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_units(mut self, units: UnitTable) -> Self {
        self.units = units;
        self
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_size)
    }

    pub fn theme(&self, index: usize) -> Option<&str> {
        self.themes.get(index).map(String::as_str)
    }

    pub fn theme_index(&self, name: &str) -> Option<usize> {
        self.themes.iter().position(|theme| theme == name)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < Self::MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                minimum: Self::MIN_BOARD_SIZE,
            });
        }
        if self.themes.is_empty() {
            return Err(ConfigError::NoThemes);
        }
        if self.team_size == 0 {
            return Err(ConfigError::EmptyTeam);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is below the minimum of {minimum}")]
    BoardTooSmall { size: usize, minimum: usize },

    #[error("at least one theme is required")]
    NoThemes,

    #[error("team size must be at least one unit")]
    EmptyTeam,
}
