//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use game_core::{
    Action, GameConfig, HighlightColor, MatchState, PointerStyle, Position, RosterEntry,
    RosterStore, Side, TurnState, Unit, UnitKind, UnitTable,
};
use runtime::{ActionProvider, BoardSurface, RuntimeConfig};

/// One call made by the runtime on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    DrawBoard(String),
    Redraw(usize),
    Highlight(Position, HighlightColor),
    Unhighlight(Position),
    ShowTooltip(String, Position),
    HideTooltip(Position),
    Pointer(PointerStyle),
    Damage(Position, u32),
    Notice(String),
}

pub type CallLog = Arc<Mutex<Vec<SurfaceCall>>>;

/// Holds `animate_damage` open until the test releases it.
#[derive(Clone, Default)]
pub struct DamageGate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

/// Surface that records every call instead of drawing.
pub struct RecordingSurface {
    size: usize,
    calls: CallLog,
    gate: Option<DamageGate>,
}

impl RecordingSurface {
    pub fn new(size: usize) -> (Self, CallLog) {
        let calls = CallLog::default();
        let surface = Self {
            size,
            calls: Arc::clone(&calls),
            gate: None,
        };
        (surface, calls)
    }

    pub fn gated(size: usize) -> (Self, CallLog, DamageGate) {
        let (mut surface, calls) = Self::new(size);
        let gate = DamageGate::default();
        surface.gate = Some(gate.clone());
        (surface, calls, gate)
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BoardSurface for RecordingSurface {
    fn board_size(&self) -> usize {
        self.size
    }

    fn draw_board(&self, theme: &str) {
        self.record(SurfaceCall::DrawBoard(theme.to_owned()));
    }

    fn redraw(&self, entries: &[RosterEntry]) {
        self.record(SurfaceCall::Redraw(entries.len()));
    }

    fn highlight_cell(&self, cell: Position, color: HighlightColor) {
        self.record(SurfaceCall::Highlight(cell, color));
    }

    fn unhighlight_cell(&self, cell: Position) {
        self.record(SurfaceCall::Unhighlight(cell));
    }

    fn show_tooltip(&self, text: &str, cell: Position) {
        self.record(SurfaceCall::ShowTooltip(text.to_owned(), cell));
    }

    fn hide_tooltip(&self, cell: Position) {
        self.record(SurfaceCall::HideTooltip(cell));
    }

    fn set_pointer(&self, pointer: PointerStyle) {
        self.record(SurfaceCall::Pointer(pointer));
    }

    async fn animate_damage(&self, cell: Position, amount: u32) {
        self.record(SurfaceCall::Damage(cell, amount));
        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }
    }

    fn show_notice(&self, text: &str) {
        self.record(SurfaceCall::Notice(text.to_owned()));
    }
}

/// Provider that replays a fixed list of actions, then passes.
#[derive(Default)]
pub struct ScriptedProvider {
    actions: Mutex<VecDeque<Action>>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ActionProvider for ScriptedProvider {
    async fn provide_action(
        &self,
        _side: Side,
        _state: &MatchState,
        _config: &GameConfig,
    ) -> runtime::Result<Option<Action>> {
        Ok(self.actions.lock().unwrap().pop_front())
    }
}

pub fn p(index: usize) -> Position {
    Position::new(index)
}

/// Level 1 unit with base stats and the given health.
pub fn unit(kind: UnitKind, health: f64) -> Unit {
    let profile = *UnitTable::standard().profile(kind);
    Unit::from_parts(kind, 1, profile.base_attack, profile.base_defence, health).unwrap()
}

/// Player-to-move match on the first theme holding `entries`.
pub fn match_state(entries: &[(usize, Unit)]) -> MatchState {
    let mut roster = RosterStore::new();
    for (position, unit) in entries {
        roster.add(unit.clone(), p(*position));
    }
    MatchState::new(TurnState::new(), roster)
}

/// Zero pacing delay, fixed seed, no autosave.
pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        turn_delay: Duration::ZERO,
        seed: Some(7),
        autosave: false,
        ..RuntimeConfig::default()
    }
}

pub fn calls(log: &CallLog) -> Vec<SurfaceCall> {
    log.lock().unwrap().clone()
}

pub fn entry_at(state: &MatchState, index: usize) -> Option<&RosterEntry> {
    state
        .roster()
        .entries()
        .iter()
        .find(|entry| entry.position == p(index))
}
