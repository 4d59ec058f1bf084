//! # Frame Compositor
//!
//! Turns the grid into printable characters. Layers, outermost first:
//!
//! ```text
//! =========        row 0 and the last row: '='
//! |  #    |        interior rows: '|' at both ends, live glyph or ' '
//! |-+-----|        edit mode: cursor row '-', cursor column '|',
//! | |     |        cursor cell '+' (live cells keep the live glyph)
//! =========
//! ```
//!
//! The cursor overlay is drawn on top of the border, so a cursor on an edge
//! row or column replaces border glyphs too.

use super::grid::Grid;
use super::state::Cursor;

pub const DEFAULT_LIVE_GLYPH: char = '#';
pub const HORIZONTAL_BORDER: char = '=';
pub const VERTICAL_BORDER: char = '|';
pub const DEAD_GLYPH: char = ' ';
pub const CURSOR_ROW: char = '-';
pub const CURSOR_COL: char = '|';
pub const CURSOR_CENTER: char = '+';

/// A screen's worth of characters, same dimensions as the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    chars: Vec<char>,
}

impl Frame {
    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            chars: vec![DEAD_GLYPH; rows * cols],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        (row < self.rows && col < self.cols).then(|| self.chars[row * self.cols + col])
    }

    fn put(&mut self, row: usize, col: usize, ch: char) {
        if row < self.rows && col < self.cols {
            self.chars[row * self.cols + col] = ch;
        }
    }

    /// One string per row, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        if self.cols == 0 {
            return vec![String::new(); self.rows];
        }
        self.chars
            .chunks(self.cols)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// Composites grid state, border and (in edit mode) the cursor overlay.
pub fn compose(grid: &Grid, cursor: Cursor, edit_mode: bool, live_glyph: char) -> Frame {
    let (rows, cols) = grid.dimensions();
    let mut frame = Frame::blank(rows, cols);
    let last_row = rows.saturating_sub(1);
    let last_col = cols.saturating_sub(1);

    for (row, col, cell) in grid.iter() {
        let ch = if row == 0 || row == last_row {
            HORIZONTAL_BORDER
        } else if col == 0 || col == last_col {
            VERTICAL_BORDER
        } else if cell.is_alive() {
            live_glyph
        } else {
            DEAD_GLYPH
        };
        frame.put(row, col, ch);
    }

    if edit_mode {
        draw_cursor(&mut frame, grid, cursor, live_glyph);
    }
    frame
}

fn draw_cursor(frame: &mut Frame, grid: &Grid, cursor: Cursor, live_glyph: char) {
    let marker = |row: usize, col: usize, ch: char| {
        if grid.is_alive(row, col) { live_glyph } else { ch }
    };

    for col in 0..grid.cols() {
        frame.put(cursor.y, col, marker(cursor.y, col, CURSOR_ROW));
    }
    for row in 0..grid.rows() {
        frame.put(row, cursor.x, marker(row, cursor.x, CURSOR_COL));
    }
    frame.put(cursor.y, cursor.x, marker(cursor.y, cursor.x, CURSOR_CENTER));
}
