//! # Actions
//!
//! Every keystroke that means something becomes an `Action`.
//! Space? That's `Action::ToggleCell`. Enter? `Action::ToggleMode`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Outcome` telling the main loop what to do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Outcome
//! ```

use log::debug;

use super::keys::Key;
use super::state::{App, Direction};

/// Ctrl+C arrives as a plain byte in raw mode.
const CTRL_C: u8 = 0x03;
pub const QUIT_KEY: u8 = b'q';
pub const MASS_EDIT_KEY: u8 = b'm';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    ToggleCell,
    ToggleMassEdit,
    ToggleMode,
    Quit,
}

impl Action {
    /// Maps a decoded key to an action; unbound keys map to `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Arrow(direction) => Some(Action::Move(direction)),
            Key::Enter => Some(Action::ToggleMode),
            Key::Space => Some(Action::ToggleCell),
            Key::Byte(MASS_EDIT_KEY) => Some(Action::ToggleMassEdit),
            Key::Byte(QUIT_KEY) | Key::Byte(CTRL_C) => Some(Action::Quit),
            Key::Byte(_) | Key::Escape | Key::UnknownSequence => None,
        }
    }
}

/// What the main loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; keep going in the current mode.
    Continue,
    /// `edit_mode` flipped.
    ToggleMode,
    Quit,
    /// Nothing changed.
    NoOp,
}

pub fn update(app: &mut App, action: Action) -> Outcome {
    debug!("update: {:?} (edit_mode={})", action, app.edit_mode);
    match action {
        Action::Move(direction) => {
            if !app.edit_mode {
                return Outcome::NoOp;
            }
            let (rows, cols) = app.grid.dimensions();
            let moved = app.cursor.step(direction, rows, cols);
            if moved && app.mass_edit {
                toggle_under_cursor(app);
            }
            Outcome::Continue
        }
        Action::ToggleCell => {
            if !app.edit_mode {
                return Outcome::NoOp;
            }
            toggle_under_cursor(app);
            Outcome::Continue
        }
        Action::ToggleMassEdit => {
            if !app.edit_mode {
                return Outcome::NoOp;
            }
            app.mass_edit = !app.mass_edit;
            Outcome::Continue
        }
        Action::ToggleMode => {
            app.edit_mode = !app.edit_mode;
            Outcome::ToggleMode
        }
        Action::Quit => Outcome::Quit,
    }
}

fn toggle_under_cursor(app: &mut App) {
    let (row, col) = (app.cursor.y, app.cursor.x);
    // The cursor is clamped to the grid, so this only fails if that breaks.
    if let Err(e) = app.grid.toggle(row, col) {
        debug!("toggle ignored: {}", e);
    }
}
