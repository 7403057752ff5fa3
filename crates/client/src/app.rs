//! Line-based input loop.
//!
//! Each line maps to one surface input on the runtime handle.
use anyhow::Result;
use game_core::{GameConfig, Position};
use runtime::{RuntimeError, RuntimeHandle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::autopilot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Click(Position),
    Hover(Position),
    Leave(Position),
    NewGame,
    Save,
    Load,
    Auto(u32),
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_ascii_lowercase();
    let argument = words.next();
    if words.next().is_some() {
        return None;
    }

    let cell = || argument?.parse().ok().map(Position::new);
    match (command.as_str(), argument) {
        ("click" | "c", Some(_)) => cell().map(Input::Click),
        ("hover" | "h", Some(_)) => cell().map(Input::Hover),
        ("leave" | "l", Some(_)) => cell().map(Input::Leave),
        ("auto" | "a", turns) => match turns {
            Some(turns) => turns.parse().ok().map(Input::Auto),
            None => Some(Input::Auto(1)),
        },
        ("new", None) => Some(Input::NewGame),
        ("save", None) => Some(Input::Save),
        ("load", None) => Some(Input::Load),
        ("help" | "?", None) => Some(Input::Help),
        ("quit" | "q" | "exit", None) => Some(Input::Quit),
        (index, None) => index.parse().ok().map(|i| Input::Click(Position::new(i))),
        _ => None,
    }
}

fn print_help() {
    println!(
        "commands: <cell> | click <cell> | hover <cell> | leave <cell> | \
         auto [turns] | new | save | load | help | quit"
    );
}

/// Reads stdin until `quit` or end of input.
pub async fn run(handle: &RuntimeHandle, config: &GameConfig) -> Result<()> {
    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(input) = parse_input(&line) else {
            println!("unrecognised input `{}`; type `help`", line.trim());
            continue;
        };

        let result = match input {
            Input::Click(cell) => handle.cell_click(cell).await.map(drop),
            Input::Hover(cell) => handle.cell_enter(cell).await.map(drop),
            Input::Leave(cell) => handle.cell_leave(cell).await,
            Input::NewGame => handle.new_game().await,
            Input::Save => handle.save_game().await,
            Input::Load => handle.load_game().await.map(drop),
            Input::Auto(turns) => {
                let played = autopilot::play(handle, config, turns).await?;
                println!("autopilot played {played} turn(s)");
                Ok(())
            }
            Input::Help => {
                print_help();
                Ok(())
            }
            Input::Quit => break,
        };

        match result {
            Ok(()) => {}
            // Already shown on the board as a notice.
            Err(RuntimeError::Action(error)) => tracing::debug!("input rejected: {}", error),
            Err(RuntimeError::Busy) => println!("still resolving the last turn"),
            Err(error) => return Err(error.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cells_and_commands() {
        let p = Position::new;
        assert_eq!(parse_input("12"), Some(Input::Click(p(12))));
        assert_eq!(parse_input("click 3"), Some(Input::Click(p(3))));
        assert_eq!(parse_input("H 7"), Some(Input::Hover(p(7))));
        assert_eq!(parse_input("leave 7"), Some(Input::Leave(p(7))));
        assert_eq!(parse_input("auto"), Some(Input::Auto(1)));
        assert_eq!(parse_input("auto 5"), Some(Input::Auto(5)));
        assert_eq!(parse_input("  save "), Some(Input::Save));
        assert_eq!(parse_input("q"), Some(Input::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_input("click"), None);
        assert_eq!(parse_input("click x"), None);
        assert_eq!(parse_input("save now"), None);
        assert_eq!(parse_input("click 1 2"), None);
        assert_eq!(parse_input("-3"), None);
    }
}
