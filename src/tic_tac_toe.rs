use std::fmt;

use crate::error::Error;

/// Number of cells on the board.
pub const CELLS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Symbol),
}

/// The 3x3 grid, stored flat in row-major order (index = row * 3 + col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Marks the cell at `index` with `symbol`, overwriting whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn set(&mut self, index: usize, symbol: Symbol) {
        assert!(index < CELLS, "{}", Error::IndexOutOfRange { index });
        self.cells[index] = Cell::Mark(symbol);
    }

    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn get(&self, index: usize) -> Cell {
        assert!(index < CELLS, "{}", Error::IndexOutOfRange { index });
        self.cells[index]
    }

    pub fn try_get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
    }

    /// Returns an independent copy of the board.
    pub fn snapshot(&self) -> Board {
        *self
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Mark(Symbol::X) => "X",
                    Cell::Mark(Symbol::O) => "O",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
