//! # TUI Adapter
//!
//! The terminal-specific layer. Sizes the grid from the terminal, draws
//! frames, and feeds decoded keystrokes into `core::action::update`.
//!
//! ## Main Loop
//!
//! Two states, starting in EDIT:
//!
//! - **EDIT**: draw the grid with the cursor overlay, block for one key,
//!   apply it. Enter switches to RUN.
//! - **RUN**: advance one generation, draw without the cursor, then wait out
//!   the tick while polling for keys. Enter goes back to EDIT.
//!
//! `q` (or Ctrl+C) quits from either state.

pub mod terminal;

use log::{debug, info};
use std::io;
use std::time::{Duration, Instant};

use crate::core::action::{Action, Outcome, update};
use crate::core::config::ResolvedConfig;
use crate::core::frame::compose;
use crate::core::grid::Grid;
use crate::core::keys::{ESCAPE_TIMEOUT, Key, KeyDecoder};
use crate::core::state::App;
use crate::tui::terminal::{CrosstermTerminal, Terminal};

/// Loop state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Edit,
    Run,
}

impl Mode {
    fn of(app: &App) -> Self {
        if app.edit_mode { Mode::Edit } else { Mode::Run }
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut terminal = CrosstermTerminal::new()?;
    let app = session(&mut terminal, &config)?;
    info!("Session ended after {} generations", app.generation);
    Ok(())
}

/// Sizes the grid from the terminal once, then runs the loop to completion.
pub fn session<T: Terminal>(terminal: &mut T, config: &ResolvedConfig) -> io::Result<App> {
    let (term_rows, term_cols) = terminal.size()?;
    let grid = Grid::for_terminal(term_rows, term_cols).map_err(io::Error::other)?;
    info!(
        "Terminal {}x{}, grid {}x{}",
        term_rows,
        term_cols,
        grid.rows(),
        grid.cols()
    );

    let mut app = App::new(grid, config.live_glyph);
    run_loop(terminal, &mut app, config)?;
    Ok(app)
}

/// Drives the EDIT/RUN state machine until the user quits.
pub fn run_loop<T: Terminal>(
    terminal: &mut T,
    app: &mut App,
    config: &ResolvedConfig,
) -> io::Result<()> {
    let mut decoder = KeyDecoder::new();

    loop {
        let outcome = match Mode::of(app) {
            Mode::Edit => {
                draw(terminal, app, config)?;
                match read_key(terminal, &mut decoder, None)? {
                    Some(key) => handle_key(app, key),
                    None => Outcome::NoOp,
                }
            }
            Mode::Run => {
                app.tick();
                draw(terminal, app, config)?;
                wait_for_tick(terminal, &mut decoder, app, config.tick)?
            }
        };

        match outcome {
            Outcome::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Outcome::ToggleMode => {
                info!("Switched to {:?} mode at generation {}", Mode::of(app), app.generation);
            }
            Outcome::Continue | Outcome::NoOp => {}
        }
    }
}

fn draw<T: Terminal>(terminal: &mut T, app: &App, config: &ResolvedConfig) -> io::Result<()> {
    let frame = compose(&app.grid, app.cursor, app.edit_mode, app.live_glyph);
    let status = config.status_line.then(|| app.status_line());
    terminal.present(&frame, status.as_deref())
}

fn handle_key(app: &mut App, key: Key) -> Outcome {
    debug!("Key: {:?}", key);
    match Action::from_key(key) {
        Some(action) => update(app, action),
        None => Outcome::NoOp,
    }
}

/// Sleeps until the next tick is due, applying any keys that arrive meanwhile.
///
/// Returns early with `ToggleMode` or `Quit`; otherwise `Continue` once the
/// tick interval has elapsed.
fn wait_for_tick<T: Terminal>(
    terminal: &mut T,
    decoder: &mut KeyDecoder,
    app: &mut App,
    tick: Duration,
) -> io::Result<Outcome> {
    let deadline = Instant::now() + tick;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(Outcome::Continue);
        }
        match read_key(terminal, decoder, Some(remaining))? {
            None => return Ok(Outcome::Continue),
            Some(key) => match handle_key(app, key) {
                outcome @ (Outcome::ToggleMode | Outcome::Quit) => return Ok(outcome),
                Outcome::Continue | Outcome::NoOp => {}
            },
        }
    }
}

/// Reads bytes until a full key is decoded.
///
/// `timeout` bounds the wait for the first byte (`None` blocks). Once an
/// escape sequence has started, each further byte gets `ESCAPE_TIMEOUT`;
/// if none comes the sequence is flushed as a lone Escape.
fn read_key<T: Terminal>(
    terminal: &mut T,
    decoder: &mut KeyDecoder,
    timeout: Option<Duration>,
) -> io::Result<Option<Key>> {
    let mut wait = timeout;
    loop {
        match terminal.read_byte(wait)? {
            Some(byte) => {
                if let Some(key) = decoder.feed(byte) {
                    return Ok(Some(key));
                }
                wait = Some(ESCAPE_TIMEOUT);
            }
            None if decoder.is_pending() => return Ok(decoder.flush()),
            None => return Ok(None),
        }
    }
}
