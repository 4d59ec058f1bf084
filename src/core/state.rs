//! # Application State
//!
//! Everything the simulation knows, held in one place and passed explicitly.
//!
//! ```text
//! App
//! ├── grid: Grid            // live/dead cells
//! ├── cursor: Cursor        // edit cursor, always inside the grid
//! ├── edit_mode: bool       // true = paused/editing, false = running
//! ├── mass_edit: bool       // arrow moves also toggle cells
//! ├── generation: u64       // steps applied so far
//! └── live_glyph: char      // glyph used for live cells
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! plus `tick()` while running.

use super::grid::Grid;
use super::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Centre of a `rows x cols` grid.
    pub fn centered(rows: usize, cols: usize) -> Self {
        Self::new(cols / 2, rows / 2)
    }

    /// Moves one cell, clamped to the grid.
    ///
    /// Returns `true` if the cursor moved, `false` if already at the edge.
    pub fn step(&mut self, direction: Direction, rows: usize, cols: usize) -> bool {
        let (x, y) = (self.x, self.y);
        match direction {
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Down if self.y + 1 < rows => self.y += 1,
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Right if self.x + 1 < cols => self.x += 1,
            _ => {}
        }
        (x, y) != (self.x, self.y)
    }
}

#[derive(Debug)]
pub struct App {
    pub grid: Grid,
    pub cursor: Cursor,
    pub edit_mode: bool,
    pub mass_edit: bool,
    pub generation: u64,
    pub live_glyph: char,
}

impl App {
    pub fn new(grid: Grid, live_glyph: char) -> Self {
        let (rows, cols) = grid.dimensions();
        Self {
            grid,
            cursor: Cursor::centered(rows, cols),
            edit_mode: true,
            mass_edit: false,
            generation: 0,
            live_glyph,
        }
    }

    /// Advances the simulation by one generation.
    pub fn tick(&mut self) {
        self.grid = rules::step(&self.grid);
        self.generation += 1;
    }

    /// One-line summary for the row below the grid.
    pub fn status_line(&self) -> String {
        let mode = if self.edit_mode { "EDIT" } else { "RUN" };
        let help = if self.edit_mode {
            "arrows move | space toggle | m mass-edit | enter run | q quit"
        } else {
            "enter edit | q quit"
        };
        let mass = if self.edit_mode && self.mass_edit {
            " [mass]"
        } else {
            ""
        };
        format!(
            " {mode}{mass} | gen {} | live {} | {help}",
            self.generation,
            self.grid.live_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Cell;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app(9, 21);
        assert!(app.edit_mode);
        assert!(!app.mass_edit);
        assert_eq!(app.generation, 0);
        assert_eq!(app.cursor, Cursor::new(10, 4));
        assert_eq!(app.grid.live_count(), 0);
    }

    #[test]
    fn test_app_debug_output_names_fields() {
        let app = test_app(3, 3);
        let debug = format!("{:?}", app);
        assert!(debug.starts_with("App {"));
        assert!(debug.contains("edit_mode: true"));
    }

    #[test]
    fn test_cursor_clamps_at_every_edge() {
        let mut cursor = Cursor::new(0, 0);
        assert!(!cursor.step(Direction::Up, 3, 4));
        assert!(!cursor.step(Direction::Left, 3, 4));
        assert_eq!(cursor, Cursor::new(0, 0));

        let mut cursor = Cursor::new(3, 2);
        assert!(!cursor.step(Direction::Down, 3, 4));
        assert!(!cursor.step(Direction::Right, 3, 4));
        assert_eq!(cursor, Cursor::new(3, 2));
    }

    #[test]
    fn test_cursor_moves_one_cell() {
        let mut cursor = Cursor::new(1, 1);
        assert!(cursor.step(Direction::Right, 3, 4));
        assert!(cursor.step(Direction::Down, 3, 4));
        assert_eq!(cursor, Cursor::new(2, 2));
        assert!(cursor.step(Direction::Up, 3, 4));
        assert!(cursor.step(Direction::Left, 3, 4));
        assert_eq!(cursor, Cursor::new(1, 1));
    }

    #[test]
    fn test_tick_counts_generations() {
        let mut app = test_app(6, 6);
        app.grid.set(2, 2, Cell::Alive).unwrap();
        app.tick();
        assert_eq!(app.generation, 1);
        assert_eq!(app.grid.live_count(), 0);
    }

    #[test]
    fn test_status_line_reflects_mode() {
        let mut app = test_app(6, 6);
        app.mass_edit = true;
        let status = app.status_line();
        assert!(status.starts_with(" EDIT [mass]"));
        assert!(status.contains("gen 0"));

        app.edit_mode = false;
        let status = app.status_line();
        assert!(status.starts_with(" RUN |"));
        assert!(status.contains("enter edit"));
    }
}
