//! Plain data types shared by the state, engine and snapshot layers.
mod common;
mod turn;
mod unit;

pub use common::{Position, Side};
pub use turn::{MatchOutcome, TurnState};
pub use unit::{HealthLevel, Unit, UnitKind, UnitProfile, UnitTable};
