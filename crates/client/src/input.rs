//! Per-frame input sources.
use std::io::{self, BufRead, Write};

use runtime::{FrameInput, Game, MenuCommand, ScreenKind, Surface};

use crate::surface::TextSurface;

/// Produces the input for the next frame.
pub trait InputSource {
    fn next_input(&mut self, game: &Game) -> FrameInput;
}

/// Starts one campaign from the menu and quits once it returns there.
#[derive(Debug, Default)]
pub struct AutoPilot {
    started: bool,
}

impl InputSource for AutoPilot {
    fn next_input(&mut self, game: &Game) -> FrameInput {
        if game.screen_kind() != ScreenKind::MainMenu {
            return FrameInput::default();
        }
        if self.started {
            FrameInput::menu(MenuCommand::Quit)
        } else {
            self.started = true;
            FrameInput::menu(MenuCommand::Start)
        }
    }
}

/// Line-based terminal input for human-controlled sides.
///
/// On the menu it reads `start` or `quit`; during a human turn it prints the
/// board and reads a target cell as `x y`.
pub struct StdinInput<R> {
    reader: R,
    surface: TextSurface,
}

impl StdinInput<io::StdinLock<'static>> {
    pub fn new() -> Self {
        Self::with_reader(io::stdin().lock())
    }
}

impl<R: BufRead> StdinInput<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            surface: TextSurface::new(),
        }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{}", text);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_ascii_lowercase()),
        }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    fn next_input(&mut self, game: &Game) -> FrameInput {
        match game.screen_kind() {
            ScreenKind::MainMenu => match self.prompt("start or quit> ").as_deref() {
                Some("start") | Some("s") => FrameInput::menu(MenuCommand::Start),
                // End of input also quits.
                Some("quit") | Some("q") | None => FrameInput::menu(MenuCommand::Quit),
                Some(_) => FrameInput::default(),
            },
            ScreenKind::Level => {
                let Some(level) = game.level().filter(|level| level.awaiting_input()) else {
                    return FrameInput::default();
                };
                self.surface.clear();
                level.draw(&mut self.surface);
                self.surface.present();
                println!("{}", self.surface.frame());

                let cell_size = level.battlefield().config().cell_size as i32;
                let Some(line) = self.prompt("cell x y> ") else {
                    return FrameInput::default();
                };
                match parse_cell(&line) {
                    Some((x, y)) => {
                        FrameInput::click(x * cell_size + cell_size / 2, y * cell_size + cell_size / 2)
                    }
                    None => {
                        tracing::warn!("could not parse cell from {:?}", line);
                        FrameInput::default()
                    }
                }
            }
            _ => FrameInput::default(),
        }
    }
}

fn parse_cell(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_integers() {
        assert_eq!(parse_cell("3 4"), Some((3, 4)));
        assert_eq!(parse_cell("  0   11 "), Some((0, 11)));
        assert_eq!(parse_cell("3"), None);
        assert_eq!(parse_cell("3 4 5"), None);
        assert_eq!(parse_cell("a b"), None);
    }
}
