//! Abstract rendering and input surface.
//!
//! The runtime never draws anything itself. It pushes read-only projections
//! to a [`BoardSurface`] and the surface's owner forwards pointer input to
//! the [`RuntimeHandle`](crate::RuntimeHandle):
//!
//! | surface input         | handle method              |
//! |-----------------------|----------------------------|
//! | cursor enters a cell  | `RuntimeHandle::cell_enter` |
//! | cursor leaves a cell  | `RuntimeHandle::cell_leave` |
//! | cell clicked          | `RuntimeHandle::cell_click` |
//! | "new game" pressed    | `RuntimeHandle::new_game`   |
//! | "save" pressed        | `RuntimeHandle::save_game`  |
//! | "load" pressed        | `RuntimeHandle::load_game`  |
use async_trait::async_trait;

use game_core::{HighlightColor, PointerStyle, Position, RosterEntry};

/// Board rendering collaborator.
///
/// All methods except [`BoardSurface::animate_damage`] are fire-and-forget.
/// The worker awaits `animate_damage` before redrawing, so implementations
/// decide how long the damage label stays visible.
#[async_trait]
pub trait BoardSurface: Send + Sync {
    /// Side length of the board this surface renders. Read once at build time.
    fn board_size(&self) -> usize;

    /// Clears the board and paints tiles for `theme`.
    fn draw_board(&self, theme: &str);

    /// Repaints every unit.
    fn redraw(&self, entries: &[RosterEntry]);

    fn highlight_cell(&self, cell: Position, color: HighlightColor);

    fn unhighlight_cell(&self, cell: Position);

    fn show_tooltip(&self, text: &str, cell: Position);

    fn hide_tooltip(&self, cell: Position);

    fn set_pointer(&self, pointer: PointerStyle);

    /// Shows `amount` floating over `cell`; resolves when the animation ends.
    async fn animate_damage(&self, cell: Position, amount: u32);

    /// Transient user-visible message (rejections, match results).
    fn show_notice(&self, text: &str);
}
