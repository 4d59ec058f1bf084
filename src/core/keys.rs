//! # Keystroke Decoding
//!
//! Raw stdin delivers bytes; arrow keys arrive as three of them
//! (`ESC [ A`). `KeyDecoder` turns the byte stream into `Key` values with an
//! explicit state machine:
//!
//! ```text
//!            ESC              '[' | 'O'           final byte
//! Ground ─────────▶ Bracket ─────────────▶ Final ───────────▶ Ground (emit)
//!   ▲                  │ other / flush        │ flush
//!   └──────────────────┴──────────────────────┘  (emit Escape)
//! ```
//!
//! The caller is expected to `flush()` when no byte follows an `ESC` within
//! a short timeout, so a lone Escape press never blocks input.

use std::time::Duration;

use super::state::Direction;

/// How long to wait for the rest of an escape sequence.
pub const ESCAPE_TIMEOUT: Duration = Duration::from_millis(50);

const ESC: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    Enter,
    Space,
    /// A lone or aborted escape sequence.
    Escape,
    /// A complete CSI/SS3 sequence that isn't an arrow (Home, F1, ...).
    UnknownSequence,
    Byte(u8),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum DecodeState {
    #[default]
    Ground,
    AwaitingBracket,
    AwaitingFinal,
}

#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: DecodeState,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while in the middle of an escape sequence.
    pub fn is_pending(&self) -> bool {
        self.state != DecodeState::Ground
    }

    /// Feeds one byte; returns a key once one is complete.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            DecodeState::Ground => match byte {
                ESC => {
                    self.state = DecodeState::AwaitingBracket;
                    None
                }
                b'\r' | b'\n' => Some(Key::Enter),
                b' ' => Some(Key::Space),
                other => Some(Key::Byte(other)),
            },
            DecodeState::AwaitingBracket => match byte {
                b'[' | b'O' => {
                    self.state = DecodeState::AwaitingFinal;
                    None
                }
                _ => {
                    self.state = DecodeState::Ground;
                    Some(Key::Escape)
                }
            },
            DecodeState::AwaitingFinal => match byte {
                // Parameter and intermediate bytes, e.g. "1;5" in ESC [ 1 ; 5 C
                0x20..=0x3f => None,
                _ => {
                    self.state = DecodeState::Ground;
                    Some(match byte {
                        b'A' => Key::Arrow(Direction::Up),
                        b'B' => Key::Arrow(Direction::Down),
                        b'C' => Key::Arrow(Direction::Right),
                        b'D' => Key::Arrow(Direction::Left),
                        _ => Key::UnknownSequence,
                    })
                }
            },
        }
    }

    /// Abandons a pending sequence after the escape timeout.
    pub fn flush(&mut self) -> Option<Key> {
        if self.is_pending() {
            self.state = DecodeState::Ground;
            Some(Key::Escape)
        } else {
            None
        }
    }
}
