use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character form used by `Display` and `Board::from_rows`
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'R' => Some(Cell::Red),
            'Y' => Some(Cell::Yellow),
            _ => None,
        }
    }

    /// Swap Red and Yellow, leaving Empty alone
    pub fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Red => Cell::Yellow,
            Cell::Yellow => Cell::Red,
        }
    }
}

/// Fixed-size grid of cells, stored row-major.
///
/// Row 0 is the top, row `rows - 1` is the bottom. A cell above an empty cell
/// in the same column is always empty; only `drop_piece` and `undo_top` write
/// cells, and both keep that true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board must have at least one cell");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Create the standard 6x7 board
    pub fn standard() -> Self {
        Self::new(ROWS, COLS)
    }

    /// Build a board from its text form, top row first.
    ///
    /// Each row uses `.` for empty, `R` for red and `Y` for yellow. Rows must
    /// all have the same width and discs must rest on something.
    pub fn from_rows(rows: &[&str]) -> Result<Self, MoveError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MoveError::Parse("board has no cells".into()));
        }

        let mut board = Board::new(height, width);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(MoveError::Parse(format!(
                    "row {row} has {} cells, expected {width}",
                    line.chars().count()
                )));
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_symbol(c)
                    .ok_or_else(|| MoveError::Parse(format!("unknown cell '{c}' at row {row}")))?;
                board.cells[row * width + col] = cell;
            }
        }

        for col in 0..width {
            for row in 0..height - 1 {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(MoveError::Parse(format!(
                        "floating disc at row {row}, column {col}"
                    )));
                }
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position. Panics if out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside a {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Number of discs in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.rows)
            .rev()
            .take_while(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Columns that can still take a disc, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        if cell == Cell::Empty {
            return Err(MoveError::EmptyDisc);
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        let row = self.rows - 1 - self.column_height(col);
        self.set(row, col, cell);
        Ok(row)
    }

    /// Remove the topmost disc of a column and return it.
    ///
    /// Returns `None` and leaves the board untouched when the column is empty
    /// or out of range.
    pub fn undo_top(&mut self, col: usize) -> Option<Cell> {
        if col >= self.cols {
            return None;
        }
        let row = (0..self.rows).find(|&row| self.get(row, col) != Cell::Empty)?;
        let cell = self.get(row, col);
        self.set(row, col, Cell::Empty);
        Some(cell)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Total number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Relabel every Red disc as Yellow and vice versa
    pub fn swap_colors(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.swapped();
        }
    }

    /// Check if the disc at (row, col) is part of a four-in-a-row.
    /// See [`crate::game::check_win`].
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        super::win::check_win(self, row, col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                write!(f, "{}", self.get(row, col).symbol())?;
            }
        }
        Ok(())
    }
}
