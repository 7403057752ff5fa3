//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the match and executes every command; nothing
//! else in the crate mutates match state.

mod simulation;

pub use simulation::{Command, SimulationWorker, WorkerSettings};
