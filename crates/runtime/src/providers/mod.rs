//! Action provider implementations.

pub mod ai;

pub use ai::{GreedyAiProvider, choose_action};
