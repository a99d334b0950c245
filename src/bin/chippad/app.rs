//! Chippad - interactive trigger loop standing in for a game loop.

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

use chipfx::soundboard::Soundboard;

const VOLUME_STEP: f32 = 0.1;

pub struct Chippad {
    board: Soundboard,
    master_volume: f32,
}

impl Chippad {
    pub fn new() -> Self {
        Self {
            board: Soundboard::new(),
            master_volume: 1.0,
        }
    }

    pub fn run(mut self) -> EyreResult<()> {
        println!("=== chippad ===");
        if !self.board.is_audible() {
            println!("(no audio device; triggers will be silent)");
        }
        let mut names: Vec<_> = self.board.bank().names().collect();
        names.sort_unstable();
        println!("Loaded cues: {}", names.join(", "));
        println!();
        println!("  space  jump");
        println!("  l      land");
        println!("  c      collect");
        println!("  x      crash");
        println!("  +/-    master volume");
        println!("  q/esc  quit");
        println!();

        terminal::enable_raw_mode()?;
        let result = self.key_loop();
        terminal::disable_raw_mode()?;
        result
    }

    fn key_loop(&mut self) -> EyreResult<()> {
        loop {
            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char(' ') => {
                    self.board.trigger("jump");
                }
                KeyCode::Char('l') => {
                    self.board.trigger("land");
                }
                KeyCode::Char('c') => {
                    self.board.trigger("collect");
                }
                KeyCode::Char('x') => {
                    self.board.trigger("crash");
                }
                KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_volume(VOLUME_STEP),
                KeyCode::Char('-') => self.adjust_volume(-VOLUME_STEP),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            }
        }
    }

    fn adjust_volume(&mut self, delta: f32) {
        self.master_volume = (self.master_volume + delta).clamp(0.0, 1.0);
        self.board.set_master_volume(self.master_volume);
        // Raw mode needs the explicit carriage return.
        print!("master volume: {:.1}\r\n", self.master_volume);
    }
}
