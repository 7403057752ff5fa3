use crate::state::Position;

use super::GameEngine;

/// Cursor shape a surface should show over a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum PointerStyle {
    Auto,
    Pointer,
    Crosshair,
    NotAllowed,
}

/// Cell highlight colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HighlightColor {
    /// The selected unit.
    Yellow,
    /// Reachable empty cell.
    Green,
    /// Enemy within attack range.
    Red,
}

/// Everything a surface needs to render a hover, computed without side
/// effects on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverHint {
    pub cell: Position,
    /// Unit info line to show next to the cell.
    pub tooltip: Option<String>,
    pub pointer: PointerStyle,
    pub highlight: Option<HighlightColor>,
    /// Previously hovered cell whose highlight must be cleared first.
    pub clear: Option<Position>,
}

/// Hover handling for GameEngine.
impl<'a> GameEngine<'a> {
    /// Describes what hovering `cell` should look like.
    ///
    /// With a unit selected, every unit shows its info line; enemies within
    /// attack range get a red highlight and empty cells within move range a
    /// green one. Without a selection only player units show their info.
    /// The hovered cell is remembered so the next hover can clear it.
    pub fn hover(&mut self, cell: Position) -> HoverHint {
        let board = self.config.board();
        let roster = self.state.roster();
        let unit = roster.unit_at(cell);
        let tooltip = unit.map(ToString::to_string);
        let own = self.is_player_unit(cell);

        let turn = self.state.turn();
        let selected = turn
            .selected
            .filter(|_| !turn.is_game_over())
            .and_then(|sel| self.player_unit(sel).map(|u| (sel, u.kind())));

        let Some((selected, kind)) = selected else {
            return HoverHint {
                cell,
                tooltip: tooltip.filter(|_| own),
                pointer: if own {
                    PointerStyle::Pointer
                } else {
                    PointerStyle::NotAllowed
                },
                highlight: None,
                clear: None,
            };
        };

        let units = &self.config.units;
        let distance = board.distance(selected, cell);
        let (pointer, highlight) = match unit {
            Some(_) if own => (PointerStyle::Pointer, None),
            Some(_) if distance <= units.attack_range(kind) => {
                (PointerStyle::Crosshair, Some(HighlightColor::Red))
            }
            None if distance <= units.move_range(kind) => {
                (PointerStyle::Pointer, Some(HighlightColor::Green))
            }
            _ => (PointerStyle::NotAllowed, None),
        };

        let clear = self
            .state
            .turn_mut()
            .hovered
            .replace(cell)
            .filter(|previous| *previous != selected);

        HoverHint {
            cell,
            tooltip,
            pointer,
            highlight,
            clear,
        }
    }
}
