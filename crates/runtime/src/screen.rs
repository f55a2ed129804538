//! Screen state machine.
//!
//! | From       | Signal          | To                                         |
//! |------------|-----------------|--------------------------------------------|
//! | MainMenu   | Start           | LevelStart(current level)                  |
//! | MainMenu   | Quit            | Exit                                       |
//! | LevelStart | banner elapsed  | Level                                      |
//! | Level      | Win / Lose      | LevelWin / LevelLose                       |
//! | LevelWin   | banner elapsed  | next LevelStart, or MainMenu after the last |
//! | LevelLose  | banner elapsed  | MainMenu                                   |
use std::time::Duration;

use crate::error::Result;
use crate::events::GameEvent;
use crate::level::{Level, LevelOutcome};
use crate::oracle::ResourceProvider;
use crate::render::Surface;

/// Menu choices available on the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Start,
    Quit,
}

/// Input gathered by the client for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub menu: Option<MenuCommand>,
    /// Pointer click in pixels.
    pub click: Option<(i32, i32)>,
}

impl FrameInput {
    pub fn menu(command: MenuCommand) -> Self {
        Self {
            menu: Some(command),
            click: None,
        }
    }

    pub fn click(px: i32, py: i32) -> Self {
        Self {
            menu: None,
            click: Some((px, py)),
        }
    }
}

/// Tag of a [`Screen`] without its payload, for events and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScreenKind {
    MainMenu,
    LevelStart,
    Level,
    LevelWin,
    LevelLose,
    Exit,
}

pub enum Screen {
    MainMenu,
    LevelStart { level: u32, elapsed: Duration },
    Level(Box<Level>),
    LevelWin { level: u32, elapsed: Duration },
    LevelLose { level: u32, elapsed: Duration },
    Exit,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::MainMenu => ScreenKind::MainMenu,
            Screen::LevelStart { .. } => ScreenKind::LevelStart,
            Screen::Level(_) => ScreenKind::Level,
            Screen::LevelWin { .. } => ScreenKind::LevelWin,
            Screen::LevelLose { .. } => ScreenKind::LevelLose,
            Screen::Exit => ScreenKind::Exit,
        }
    }
}

/// Top-level game: the active screen plus the level progression.
pub struct Game {
    resources: ResourceProvider,
    screen: Screen,
    current_level: u32,
    seed: u64,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(resources: ResourceProvider, seed: u64) -> Self {
        let current_level = resources.config().start_level;
        Self {
            resources,
            screen: Screen::MainMenu,
            current_level,
            seed,
            events: Vec::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Level that the next LevelStart will load.
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn level(&self) -> Option<&Level> {
        match &self.screen {
            Screen::Level(level) => Some(level),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advances the active screen by `dt`.
    pub fn update(&mut self, dt: Duration, input: &FrameInput) -> Result<()> {
        let banner = self.resources.config().banner_duration();
        let next = match &mut self.screen {
            Screen::MainMenu => match input.menu {
                Some(MenuCommand::Start) => Some(Screen::LevelStart {
                    level: self.current_level,
                    elapsed: Duration::ZERO,
                }),
                Some(MenuCommand::Quit) => Some(Screen::Exit),
                None => None,
            },
            Screen::LevelStart { level, elapsed } => {
                *elapsed += dt;
                if *elapsed > banner {
                    let number = *level;
                    let battlefield = self.resources.battlefield(number)?;
                    let seed = self.seed.wrapping_add(u64::from(number));
                    Some(Screen::Level(Box::new(Level::new(number, battlefield, seed))))
                } else {
                    None
                }
            }
            Screen::Level(level) => {
                if let Some((px, py)) = input.click {
                    level.select_pixel(px, py);
                }
                let outcome = level.update(dt);
                self.events.extend(level.drain_events());
                let number = level.number();
                outcome.map(|outcome| match outcome {
                    LevelOutcome::Win => Screen::LevelWin {
                        level: number,
                        elapsed: Duration::ZERO,
                    },
                    LevelOutcome::Lose => Screen::LevelLose {
                        level: number,
                        elapsed: Duration::ZERO,
                    },
                })
            }
            Screen::LevelWin { level, elapsed } => {
                *elapsed += dt;
                if *elapsed > banner {
                    let config = self.resources.config();
                    if *level < config.max_level {
                        self.current_level = *level + 1;
                        Some(Screen::LevelStart {
                            level: self.current_level,
                            elapsed: Duration::ZERO,
                        })
                    } else {
                        self.current_level = config.start_level;
                        Some(Screen::MainMenu)
                    }
                } else {
                    None
                }
            }
            Screen::LevelLose { elapsed, .. } => {
                *elapsed += dt;
                (*elapsed > banner).then_some(Screen::MainMenu)
            }
            Screen::Exit => None,
        };

        if let Some(next) = next {
            self.transition(next);
        }
        Ok(())
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        match &self.screen {
            Screen::MainMenu => surface.draw_banner("Tactics Arena: start or quit"),
            Screen::LevelStart { level, .. } => surface.draw_banner(&format!("Level {}", level)),
            Screen::Level(level) => level.draw(surface),
            Screen::LevelWin { level, .. } => {
                surface.draw_banner(&format!("Level {} cleared", level))
            }
            Screen::LevelLose { level, .. } => {
                surface.draw_banner(&format!("Defeated on level {}", level))
            }
            Screen::Exit => {}
        }
        surface.present();
    }

    fn transition(&mut self, next: Screen) {
        let from = self.screen.kind();
        let to = next.kind();
        tracing::info!(%from, %to, level = self.current_level, "screen changed");
        self.events.push(GameEvent::ScreenChanged { from, to });
        self.screen = next;
    }
}
