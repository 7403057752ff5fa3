//! Simulation worker that owns the authoritative [`game_core::MatchState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), drives
//! [`GameEngine`] transitions, pushes projections to the [`BoardSurface`]
//! and publishes [`GameEvent`]s.
//!
//! The worker handles one command at a time. A command that suspends (damage
//! animation, computer pacing delay) marks the worker busy; input commands
//! that queued up meanwhile are answered with [`RuntimeError::Busy`] instead
//! of being replayed.

use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

use game_core::{
    Action, ActionError, ActionOutcome, ClickOutcome, GameConfig, GameEngine, GameError,
    HighlightColor, HoverHint, MatchOutcome, MatchState, PointerStyle, Position, Settlement, Side,
    Snapshot,
};

use crate::api::{ActionProvider, BoardSurface, Result, RuntimeError};
use crate::events::{EventBus, GameEvent};
use crate::repository::GameStateService;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Pointer entered a cell.
    CellEnter {
        cell: Position,
        reply: oneshot::Sender<Result<HoverHint>>,
    },
    /// Pointer left a cell.
    CellLeave {
        cell: Position,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Cell clicked; may run a full player action plus the computer's reply.
    CellClick {
        cell: Position,
        reply: oneshot::Sender<Result<ClickOutcome>>,
    },
    /// Start a new match.
    NewGame { reply: oneshot::Sender<Result<()>> },
    /// Persist the current match.
    Save { reply: oneshot::Sender<Result<()>> },
    /// Replace the current match with the persisted one.
    Load { reply: oneshot::Sender<Result<bool>> },
    /// Query the current match state (read-only).
    QueryState { reply: oneshot::Sender<MatchState> },
    /// Query the persistable projection (read-only).
    Snapshot { reply: oneshot::Sender<Snapshot> },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::CellEnter { .. } => "CellEnter",
            Command::CellLeave { .. } => "CellLeave",
            Command::CellClick { .. } => "CellClick",
            Command::NewGame { .. } => "NewGame",
            Command::Save { .. } => "Save",
            Command::Load { .. } => "Load",
            Command::QueryState { .. } => "QueryState",
            Command::Snapshot { .. } => "Snapshot",
        }
    }
}

/// Pacing and persistence knobs the worker needs from the runtime config.
#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub game_config: GameConfig,
    pub turn_delay: Duration,
    pub autosave: bool,
}

/// Background task that processes match commands.
pub struct SimulationWorker {
    state: MatchState,
    config: GameConfig,
    turn_delay: Duration,
    autosave: bool,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    surface: Box<dyn BoardSurface>,
    provider: Box<dyn ActionProvider>,
    saves: GameStateService,
    rng: StdRng,
    suspended: bool,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: MatchState,
        settings: WorkerSettings,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        surface: Box<dyn BoardSurface>,
        provider: Box<dyn ActionProvider>,
        saves: GameStateService,
        rng: StdRng,
    ) -> Self {
        info!(
            "SimulationWorker initialized: {} units on a {}x{} board, theme #{}",
            state.roster().len(),
            settings.game_config.board_size,
            settings.game_config.board_size,
            state.turn().theme_index
        );

        Self {
            state,
            config: settings.game_config,
            turn_delay: settings.turn_delay,
            autosave: settings.autosave,
            command_rx,
            event_bus,
            surface,
            provider,
            saves,
            rng,
            suspended: false,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        self.render_full();
        self.resume_computer_turn().await;
        self.reject_queued();

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        debug!("SimulationWorker command channel closed, stopping");
    }

    async fn handle_command(&mut self, cmd: Command) {
        let name = cmd.name();
        match cmd {
            Command::CellEnter { cell, reply } => {
                let result = self.handle_cell_enter(cell);
                respond(reply, result, name);
            }
            Command::CellLeave { cell, reply } => {
                self.surface.hide_tooltip(cell);
                respond(reply, Ok(()), name);
            }
            Command::CellClick { cell, reply } => {
                let result = self.handle_cell_click(cell).await;
                self.reject_queued();
                respond(reply, result, name);
            }
            Command::NewGame { reply } => {
                self.start_new_match();
                respond(reply, Ok(()), name);
            }
            Command::Save { reply } => {
                let result = self.save();
                match &result {
                    Ok(()) => self.surface.show_notice("Game saved"),
                    Err(error) => self
                        .surface
                        .show_notice(&format!("Could not save the game: {error}")),
                }
                respond(reply, result, name);
            }
            Command::Load { reply } => {
                let result = self.handle_load().await;
                self.reject_queued();
                respond(reply, result, name);
            }
            Command::QueryState { reply } => {
                respond(reply, self.state.clone(), name);
            }
            Command::Snapshot { reply } => {
                respond(reply, Snapshot::capture(&self.state, &self.config), name);
            }
        }
    }

    /// Answers input that arrived while the last command was suspended.
    ///
    /// Read-only queries are still served.
    fn reject_queued(&mut self) {
        if !std::mem::take(&mut self.suspended) {
            return;
        }
        while let Ok(cmd) = self.command_rx.try_recv() {
            let name = cmd.name();
            match cmd {
                Command::QueryState { reply } => respond(reply, self.state.clone(), name),
                Command::Snapshot { reply } => {
                    respond(reply, Snapshot::capture(&self.state, &self.config), name)
                }
                Command::CellEnter { reply, .. } => respond(reply, Err(RuntimeError::Busy), name),
                Command::CellLeave { reply, .. } => respond(reply, Err(RuntimeError::Busy), name),
                Command::CellClick { reply, .. } => respond(reply, Err(RuntimeError::Busy), name),
                Command::NewGame { reply } => respond(reply, Err(RuntimeError::Busy), name),
                Command::Save { reply } => respond(reply, Err(RuntimeError::Busy), name),
                Command::Load { reply } => respond(reply, Err(RuntimeError::Busy), name),
            }
            debug!("Rejected {} while a turn was resolving", name);
        }
    }

    fn handle_cell_enter(&mut self, cell: Position) -> Result<HoverHint> {
        if !self.config.board().contains(cell) {
            return Err(ActionError::OutOfBoard { position: cell }.into());
        }

        let hint = GameEngine::new(&mut self.state, &self.config).hover(cell);

        if let Some(previous) = hint.clear {
            self.surface.unhighlight_cell(previous);
        }
        if let Some(text) = &hint.tooltip {
            self.surface.show_tooltip(text, cell);
        }
        self.surface.set_pointer(hint.pointer);
        if let Some(color) = hint.highlight {
            self.surface.highlight_cell(cell, color);
        }

        trace!("Hover {} -> {:?}", cell, hint.pointer);
        Ok(hint)
    }

    async fn handle_cell_click(&mut self, cell: Position) -> Result<ClickOutcome> {
        let selected_before = self.state.turn().selected;
        let hovered_before = self.state.turn().hovered;
        let clicked = GameEngine::new(&mut self.state, &self.config).click(cell);

        let outcome = match clicked {
            Ok(outcome) => outcome,
            Err(error) => {
                self.clear_stale_highlights(selected_before, hovered_before);
                return Err(self.reject_input(error));
            }
        };

        match outcome {
            ClickOutcome::Selected { position, previous } => {
                if let Some(previous) = previous {
                    self.surface.unhighlight_cell(previous);
                }
                self.surface.highlight_cell(position, HighlightColor::Yellow);
                debug!("Selected unit at {}", position);
            }
            ClickOutcome::Action(action) => {
                if let Err(error) = self.perform(Side::Player, action).await {
                    return Err(self.reject_input(error));
                }
                self.resume_computer_turn().await;
                self.autosave();
            }
            ClickOutcome::Ignored => {}
        }

        Ok(outcome)
    }

    async fn handle_load(&mut self) -> Result<bool> {
        let Some(snapshot) = self.saves.load() else {
            self.surface.show_notice("No saved game found");
            return Ok(false);
        };

        let restored = match snapshot.restore(&self.config) {
            Ok(state) => state,
            Err(error) => {
                warn!("Ignoring saved game ({}): {}", error.error_code(), error);
                self.surface.show_notice("No saved game found");
                return Ok(false);
            }
        };

        self.state = restored;
        self.render_full();
        self.event_bus.publish(GameEvent::Loaded);
        info!(
            "Loaded saved game: theme {}, {} units",
            self.theme_name(),
            self.state.roster().len()
        );
        self.surface.show_notice("Game loaded");

        if self.resume_computer_turn().await {
            self.autosave();
        }
        Ok(true)
    }

    /// Runs the computer's turn if it holds the turn. Returns whether it did.
    async fn resume_computer_turn(&mut self) -> bool {
        let turn = self.state.turn();
        if turn.is_game_over() || turn.current_turn != Side::Computer {
            return false;
        }

        self.suspended = true;
        if !self.turn_delay.is_zero() {
            tokio::time::sleep(self.turn_delay).await;
        }

        let choice = self
            .provider
            .provide_action(Side::Computer, &self.state, &self.config)
            .await;
        let action = match choice {
            Ok(action) => action,
            Err(error) => {
                warn!("Computer provider failed, skipping its turn: {}", error);
                None
            }
        };

        match action {
            Some(action) => {
                if let Err(error) = self.perform(Side::Computer, action).await {
                    warn!(
                        "Computer action {:?} rejected ({}): {}",
                        action,
                        error.error_code(),
                        error
                    );
                    self.skip_turn(Side::Computer);
                }
            }
            None => self.skip_turn(Side::Computer),
        }
        true
    }

    /// Executes one action, waits for its damage display and settles it.
    async fn perform(
        &mut self,
        side: Side,
        action: Action,
    ) -> std::result::Result<Settlement, ActionError> {
        let selected_before = self.state.turn().selected;
        let hovered_before = self.state.turn().hovered;

        let executed = GameEngine::new(&mut self.state, &self.config).execute(action);
        self.clear_stale_highlights(selected_before, hovered_before);
        let outcome = executed?;

        if let ActionOutcome::Attacked {
            target, outcome, ..
        } = outcome
        {
            self.suspended = true;
            self.surface
                .animate_damage(target, outcome.displayed_damage)
                .await;
        }

        let settlement =
            GameEngine::new(&mut self.state, &self.config).settle(&outcome, &mut self.rng);
        self.surface.redraw(self.state.roster().entries());

        debug!(
            "{} {} {} -> {}: {:?}",
            side, action.kind, action.from, action.to, settlement
        );
        self.event_bus.publish(GameEvent::ActionResolved {
            side,
            action,
            outcome,
            settlement,
        });

        match settlement {
            Settlement::TurnPassed { .. } => {}
            Settlement::LevelCleared { score_gained, .. } => {
                let theme = self.theme_name();
                info!("Level cleared (+{} points), next theme {}", score_gained, theme);
                self.render_full();
                self.surface.show_notice(&format!(
                    "Level cleared! +{score_gained} points. Welcome to the {theme}."
                ));
                self.event_bus.publish(GameEvent::LevelCleared {
                    theme,
                    score_gained,
                });
            }
            Settlement::Victory { .. } => self.finish(MatchOutcome::Victory),
            Settlement::Defeat => self.finish(MatchOutcome::Defeat),
        }

        Ok(settlement)
    }

    fn skip_turn(&mut self, side: Side) {
        let next = GameEngine::new(&mut self.state, &self.config).pass_turn();
        debug!("{} has no action, turn passes to {}", side, next);
        self.event_bus.publish(GameEvent::TurnSkipped { side });
    }

    fn finish(&mut self, outcome: MatchOutcome) {
        let turn = self.state.turn();
        let (score, max_score) = (turn.score, turn.max_score);
        info!("Match ended: {} (score {}, best {})", outcome, score, max_score);
        let notice = match outcome {
            MatchOutcome::Victory => format!("You won! Score: {score}, best: {max_score}"),
            MatchOutcome::Defeat => format!("You lost. Score: {score}, best: {max_score}"),
        };
        self.surface.show_notice(&notice);
        self.event_bus.publish(GameEvent::MatchEnded {
            outcome,
            score,
            max_score,
        });
    }

    fn start_new_match(&mut self) {
        GameEngine::new(&mut self.state, &self.config).start_match(&mut self.rng);
        self.render_full();

        let theme = self.theme_name();
        info!(
            "New match on {} with {} units (best score {})",
            theme,
            self.state.roster().len(),
            self.state.turn().max_score
        );
        self.event_bus.publish(GameEvent::MatchStarted { theme });
        self.autosave();
    }

    fn save(&self) -> Result<()> {
        let snapshot = Snapshot::capture(&self.state, &self.config);
        self.saves.save(&snapshot)?;
        debug!("Saved match under `{}`", self.saves.key());
        self.event_bus.publish(GameEvent::Saved);
        Ok(())
    }

    fn autosave(&self) {
        if !self.autosave {
            return;
        }
        if let Err(error) = self.save() {
            warn!("Autosave failed: {}", error);
        }
    }

    /// Surfaces a refused input and converts it for the caller.
    fn reject_input(&self, error: ActionError) -> RuntimeError {
        warn!("Rejected input ({}): {}", error.error_code(), error);
        if !error.severity().clears_selection() {
            self.surface.set_pointer(PointerStyle::NotAllowed);
        }
        self.surface.show_notice(&error.to_string());
        error.into()
    }

    fn clear_stale_highlights(&self, selected: Option<Position>, hovered: Option<Position>) {
        let turn = self.state.turn();
        if let Some(cell) = selected.filter(|cell| turn.selected != Some(*cell)) {
            self.surface.unhighlight_cell(cell);
        }
        if let Some(cell) = hovered.filter(|cell| turn.hovered != Some(*cell)) {
            self.surface.unhighlight_cell(cell);
        }
    }

    fn render_full(&self) {
        self.surface.draw_board(&self.theme_name());
        self.surface.redraw(self.state.roster().entries());
        if let Some(cell) = self.state.turn().selected {
            self.surface.highlight_cell(cell, HighlightColor::Yellow);
        }
    }

    fn theme_name(&self) -> String {
        self.config
            .theme(self.state.turn().theme_index)
            .unwrap_or_default()
            .to_owned()
    }
}

fn respond<T>(reply: oneshot::Sender<T>, value: T, command: &str) {
    if reply.send(value).is_err() {
        debug!("{} reply channel closed (caller dropped)", command);
    }
}
