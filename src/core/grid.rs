//! # Grid
//!
//! The playing field: a fixed-size rectangle of live/dead cells.
//!
//! ```text
//!        col 0   1   2  ...  cols-1
//! row 0  [ . ][ . ][ . ]    [ . ]
//! row 1  [ . ][ # ][ . ]    [ . ]      cells[row * cols + col]
//!  ...
//! ```
//!
//! Storage is one contiguous `Vec<Cell>` in row-major order. Every accessor
//! checks bounds, so an out-of-range coordinate can never reach the buffer.

use std::fmt;

/// Smallest grid that still has an interior cell inside its border.
pub const MIN_GRID_ROWS: usize = 3;
pub const MIN_GRID_COLS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    TooSmall {
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "cell ({row}, {col}) is outside the {rows}x{cols} grid"),
            GridError::TooSmall { rows, cols } => write!(
                f,
                "terminal too small: grid would be {rows}x{cols}, need at least {MIN_GRID_ROWS}x{MIN_GRID_COLS}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Sizes a grid to the terminal, leaving the bottom terminal row free.
    pub fn for_terminal(term_rows: u16, term_cols: u16) -> Result<Self, GridError> {
        let rows = usize::from(term_rows).saturating_sub(1);
        let cols = usize::from(term_cols);
        if rows < MIN_GRID_ROWS || cols < MIN_GRID_COLS {
            return Err(GridError::TooSmall { rows, cols });
        }
        Ok(Self::new(rows, cols))
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).ok().map(|i| self.cells[i])
    }

    /// Out-of-range coordinates read as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, GridError> {
        let i = self.index(row, col)?;
        let next = self.cells[i].toggled();
        self.cells[i] = next;
        Ok(next)
    }

    /// Builds a grid of the same shape with every cell computed by `f(row, col)`.
    pub fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, usize, Cell) -> Cell,
    {
        let cells = self.iter().map(|(row, col, cell)| f(row, col, cell)).collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row-major iterator over `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / cols, i % cols, cell))
    }
}
