//! Match events broadcast by the runtime.
//!
//! Events are best-effort notifications for observers (logging, front-ends,
//! tests). The authoritative state lives in the worker; consumers that need
//! it should query the handle.

mod bus;
mod game_event;

pub use bus::EventBus;
pub use game_event::GameEvent;
