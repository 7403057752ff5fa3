//! Deterministic rules for the grid tactics match.
//!
//! `game-core` defines the canonical rules (board geometry, rosters, combat,
//! progression, the turn state machine) and exposes pure APIs reused by the
//! runtime and the client. All match-state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod board;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{Action, ActionError, ActionKind, ActionOutcome, ActionTransition};
pub use board::{Board, BorderSide, TileKind};
pub use combat::{AttackOutcome, calculate_damage, level_up, resolve_attack};
pub use config::{ConfigError, GameConfig};
pub use engine::{
    ClickOutcome, GameEngine, HighlightColor, HoverHint, Phase, PointerStyle, Settlement,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    HealthLevel, MatchOutcome, MatchState, Partition, Position, PositionedUnit, RosterEntry,
    RosterStore, Side, Snapshot, SnapshotError, Team, TurnState, Unit, UnitError, UnitKind,
    UnitProfile, UnitRecord, UnitTable, generate_team,
};
