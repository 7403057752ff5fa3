//! Built-in opponent policy.
//!
//! The policy is deliberately simple and deterministic:
//!
//! 1. **Strike**: the first unit (in roster order) that has an enemy within
//!    attack range hits the weakest such enemy.
//! 2. **Advance**: otherwise the first unit that can step toward its nearest
//!    enemy does so.
//! 3. **Pass**: otherwise nothing happens.
//!
//! - [`choose_action`]: pure, side-agnostic decision function
//! - [`GreedyAiProvider`]: [`crate::ActionProvider`] wrapper used by the runtime

pub mod policy;
pub mod provider;

pub use policy::choose_action;
pub use provider::GreedyAiProvider;
