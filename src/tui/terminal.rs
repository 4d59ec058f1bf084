//! Terminal access behind a small trait, so the main loop can be driven by a
//! scripted terminal in tests.
//!
//! `CrosstermTerminal` puts the terminal in raw mode for the lifetime of the
//! value and restores it on drop, including when the loop exits through an
//! error or a panic.

use std::io::{self, Read, Stdout, Write, stdout};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue, style::Print};
use log::{debug, info, warn};

use crate::core::frame::Frame;

/// The three things the simulation needs from a terminal.
pub trait Terminal {
    /// Current size as `(rows, cols)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Reads one raw byte. `None` timeout blocks; `Ok(None)` means timed out.
    fn read_byte(&mut self, timeout: Option<Duration>) -> io::Result<Option<u8>>;

    /// Clears the screen and prints the whole frame, plus an optional status
    /// line below it.
    fn present(&mut self, frame: &Frame, status: Option<&str>) -> io::Result<()>;
}

struct RawModeGuard;

impl RawModeGuard {
    fn new(out: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(out, EnterAlternateScreen, Hide)?;
        info!("Terminal modes enabled (raw mode, alternate screen, hidden cursor)");
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

pub struct CrosstermTerminal {
    out: Stdout,
    bytes: Receiver<io::Result<u8>>,
    // Declared last so it drops after everything above.
    _guard: RawModeGuard,
}

impl CrosstermTerminal {
    pub fn new() -> io::Result<Self> {
        let mut out = stdout();
        let guard = RawModeGuard::new(&mut out)?;
        Ok(Self {
            out,
            bytes: spawn_stdin_reader(),
            _guard: guard,
        })
    }
}

/// Blocking stdin reads happen on their own thread so the main loop can wait
/// with a timeout. The thread ends on EOF or when the receiver is dropped.
fn spawn_stdin_reader() -> Receiver<io::Result<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut stdin = io::stdin().lock();
        let mut buf = [0u8; 1];
        loop {
            let item = match stdin.read(&mut buf) {
                Ok(0) => {
                    debug!("stdin closed");
                    return;
                }
                Ok(_) => Ok(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => Err(e),
            };
            let failed = item.is_err();
            if tx.send(item).is_err() || failed {
                return;
            }
        }
    });
    rx
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn read_byte(&mut self, timeout: Option<Duration>) -> io::Result<Option<u8>> {
        let received = match timeout {
            Some(t) => self.bytes.recv_timeout(t),
            None => self.bytes.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(byte) => byte.map(Some),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )),
        }
    }

    fn present(&mut self, frame: &Frame, status: Option<&str>) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        let lines = frame.lines();
        // Raw mode disables newline translation, so each row is placed explicitly.
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        if let Some(status) = status {
            let (_, cols) = frame.dimensions();
            let status: String = status.chars().take(cols).collect();
            queue!(self.out, MoveTo(0, lines.len() as u16), Print(status))?;
        }
        self.out.flush()
    }
}
