//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::core::frame::{DEFAULT_LIVE_GLYPH, Frame};
use crate::core::grid::Grid;
use crate::core::state::App;
use crate::tui::terminal::Terminal;

/// A terminal that replays canned input and records every frame.
///
/// Once the input runs out, timed reads time out and blocking reads fail
/// with `UnexpectedEof`, so a script that forgets to quit ends the loop.
pub struct ScriptedTerminal {
    pub rows: u16,
    pub cols: u16,
    input: VecDeque<u8>,
    pub frames: Vec<Vec<String>>,
    pub statuses: Vec<Option<String>>,
}

impl ScriptedTerminal {
    pub fn new(input: &[u8]) -> Self {
        Self {
            rows: 24,
            cols: 80,
            input: input.iter().copied().collect(),
            frames: Vec::new(),
            statuses: Vec::new(),
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn read_byte(&mut self, timeout: Option<Duration>) -> io::Result<Option<u8>> {
        match (self.input.pop_front(), timeout) {
            (Some(byte), _) => Ok(Some(byte)),
            (None, Some(_)) => Ok(None),
            (None, None) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            )),
        }
    }

    fn present(&mut self, frame: &Frame, status: Option<&str>) -> io::Result<()> {
        self.frames.push(frame.lines());
        self.statuses.push(status.map(str::to_string));
        Ok(())
    }
}

/// Creates an all-dead App of the given grid size.
pub fn test_app(rows: usize, cols: usize) -> App {
    App::new(Grid::new(rows, cols), DEFAULT_LIVE_GLYPH)
}
