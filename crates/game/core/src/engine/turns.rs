use rand::Rng;

use crate::action::ActionOutcome;
use crate::board::BorderSide;
use crate::combat::{level_up, round_display};
use crate::state::{MatchOutcome, Side, TurnState, Unit, generate_team};

use super::GameEngine;

/// How the match continues after an action has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Settlement {
    /// Turn handed to `next`.
    TurnPassed { next: Side },
    /// Computer roster wiped out; survivors promoted and a fresh computer
    /// roster placed for theme `theme_index`. The player moves next.
    LevelCleared { theme_index: usize, score_gained: u32 },
    /// Computer roster wiped out on the final theme.
    Victory { score_gained: u32 },
    /// Player roster wiped out.
    Defeat,
}

/// Match setup and turn hand-off for GameEngine.
impl<'a> GameEngine<'a> {
    /// Starts a new match on the first theme.
    ///
    /// Both rosters get `team_size` level-1 units placed on their border
    /// columns. The best score of the previous match is kept.
    pub fn start_match<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let fresh = TurnState::carry_over(self.state.turn());
        *self.state.turn_mut() = fresh;
        self.state.roster_mut().clear();

        self.spawn(Side::Player, 1, rng);
        self.spawn(Side::Computer, 1, rng);
    }

    /// Removes the dead, evaluates end-of-roster and hands the turn over.
    ///
    /// Rosters are only re-examined when the action killed something.
    pub fn settle<R: Rng + ?Sized>(&mut self, outcome: &ActionOutcome, rng: &mut R) -> Settlement {
        if let Some(cell) = outcome.casualty() {
            self.state.roster_mut().remove(cell);

            let teams = self.state.teams(&self.config.units);
            let (player_left, computer_left) = (teams.player.len(), teams.computer.len());

            if computer_left == 0 {
                return self.clear_level(rng);
            }
            if player_left == 0 {
                let turn = self.state.turn_mut();
                turn.outcome = Some(MatchOutcome::Defeat);
                turn.selected = None;
                return Settlement::Defeat;
            }
        }

        Settlement::TurnPassed {
            next: self.pass_turn(),
        }
    }

    /// Hands the turn to the other side without any action.
    pub fn pass_turn(&mut self) -> Side {
        let turn = self.state.turn_mut();
        turn.current_turn = turn.current_turn.opponent();
        turn.selected = None;
        turn.current_turn
    }

    fn clear_level<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Settlement {
        let survivors_health: f64 = self
            .state
            .roster()
            .entries()
            .iter()
            .map(|entry| entry.unit.health())
            .sum();
        let score_gained = round_display(survivors_health);

        let turn = self.state.turn_mut();
        turn.add_score(score_gained);
        turn.selected = None;
        turn.hovered = None;

        let next_theme = turn.theme_index + 1;
        if next_theme >= self.config.themes.len() {
            turn.outcome = Some(MatchOutcome::Victory);
            return Settlement::Victory { score_gained };
        }
        turn.theme_index = next_theme;
        turn.current_turn = Side::Player;

        self.state.roster_mut().units_mut().for_each(level_up);

        let max_level = u8::try_from(next_theme + 1).unwrap_or(Unit::MAX_LEVEL);
        self.spawn(Side::Computer, max_level, rng);

        Settlement::LevelCleared {
            theme_index: next_theme,
            score_gained,
        }
    }

    fn spawn<R: Rng + ?Sized>(&mut self, side: Side, max_level: u8, rng: &mut R) -> usize {
        let units = &self.config.units;
        let team = generate_team(
            &units.kinds_for(side),
            max_level,
            self.config.team_size,
            units,
            rng,
        );
        let border = match side {
            Side::Player => BorderSide::First,
            Side::Computer => BorderSide::Last,
        };
        let cells = self.config.board().border_columns(border);
        self.state.roster_mut().assign_random(team, &cells, rng)
    }
}
