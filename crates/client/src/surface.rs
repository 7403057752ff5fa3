//! Plain-text board surface.
//!
//! Prints the board to stdout after every redraw. Highlights are kept in the
//! view and shown on the next print: `[X]` selected, `<X>` attackable,
//! `(.)` reachable. An unhighlighted unit carries its health mark instead
//! (`!` critical, `~` wounded), and empty cells show the board edge.
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use game_core::{
    Board, HealthLevel, HighlightColor, PointerStyle, Position, RosterEntry, TileKind, UnitKind,
};
use runtime::BoardSurface;

#[derive(Debug, Default)]
struct View {
    theme: String,
    units: HashMap<Position, (char, HealthLevel)>,
    highlights: HashMap<Position, HighlightColor>,
}

pub struct TextSurface {
    board: Board,
    damage_display: Duration,
    view: Mutex<View>,
}

impl TextSurface {
    pub fn new(size: usize, damage_display: Duration) -> Self {
        Self {
            board: Board::new(size),
            damage_display,
            view: Mutex::new(View::default()),
        }
    }

    fn with_view(&self, update: impl FnOnce(&mut View)) {
        match self.view.lock() {
            Ok(mut view) => update(&mut *view),
            Err(poisoned) => update(&mut *poisoned.into_inner()),
        }
    }

    fn print(&self) {
        self.with_view(|view| println!("{}", render(view, &self.board)));
    }
}

/// Player kinds are upper case, computer kinds lower case.
pub fn glyph(kind: UnitKind) -> char {
    match kind {
        UnitKind::Archer => 'A',
        UnitKind::Swordsman => 'S',
        UnitKind::Mage => 'M',
        UnitKind::Demon => 'd',
        UnitKind::Skeleton => 's',
        UnitKind::Vampire => 'v',
    }
}

fn tile(kind: TileKind) -> char {
    match kind {
        TileKind::TopLeft | TileKind::TopRight | TileKind::BottomLeft | TileKind::BottomRight => {
            '+'
        }
        TileKind::Top | TileKind::Bottom => '-',
        TileKind::Left | TileKind::Right => '|',
        TileKind::Center => '.',
    }
}

fn health_mark(level: HealthLevel) -> char {
    match level {
        HealthLevel::Critical => '!',
        HealthLevel::Normal => '~',
        HealthLevel::High => ' ',
    }
}

fn render(view: &View, board: &Board) -> String {
    let size = board.size();
    let mut out = format!("== {} ==\n", view.theme);
    for row in 0..size {
        out.push_str(&format!("{:>4} ", row * size));
        for col in 0..size {
            let cell = board.at(row, col);
            let unit = view.units.get(&cell).copied();
            let glyph = unit.map_or_else(|| tile(board.tile_kind(cell)), |(glyph, _)| glyph);
            let (open, close) = match view.highlights.get(&cell) {
                Some(HighlightColor::Yellow) => ('[', ']'),
                Some(HighlightColor::Red) => ('<', '>'),
                Some(HighlightColor::Green) => ('(', ')'),
                None => (' ', unit.map_or(' ', |(_, level)| health_mark(level))),
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }
        out.push('\n');
    }
    out
}

#[async_trait]
impl BoardSurface for TextSurface {
    fn board_size(&self) -> usize {
        self.board.size()
    }

    fn draw_board(&self, theme: &str) {
        self.with_view(|view| {
            *view = View {
                theme: theme.to_owned(),
                ..View::default()
            };
        });
    }

    fn redraw(&self, entries: &[RosterEntry]) {
        self.with_view(|view| {
            view.units = entries
                .iter()
                .map(|entry| {
                    let unit = &entry.unit;
                    (entry.position, (glyph(unit.kind()), unit.health_level()))
                })
                .collect();
        });
        self.print();
    }

    fn highlight_cell(&self, cell: Position, color: HighlightColor) {
        self.with_view(|view| {
            view.highlights.insert(cell, color);
        });
    }

    fn unhighlight_cell(&self, cell: Position) {
        self.with_view(|view| {
            view.highlights.remove(&cell);
        });
    }

    fn show_tooltip(&self, text: &str, cell: Position) {
        println!("{cell}: {text}");
    }

    fn hide_tooltip(&self, _cell: Position) {}

    fn set_pointer(&self, pointer: PointerStyle) {
        tracing::trace!("pointer: {}", pointer);
    }

    async fn animate_damage(&self, cell: Position, amount: u32) {
        println!("{cell} takes {amount} damage");
        tokio::time::sleep(self.damage_display).await;
    }

    fn show_notice(&self, text: &str) {
        println!(">> {text}");
    }
}
