use super::constants::{Mark, BOARD_SIZE};
use super::errors::{GameError, Result};
use super::position::Position;

/// The eight lines that win a round: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// The 3x3 playing grid.
/// Cleared at the start of every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Internal indexing: grid[y][x].
    grid: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from rows of cells, top row first.
    pub fn from_rows(rows: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid: rows }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.grid = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.grid[pos.y()][pos.x()]
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Put a mark on an empty cell. The board is left untouched on error.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<()> {
        if self.is_occupied(pos) {
            return Err(GameError::Occupied(pos));
        }
        self.grid[pos.y()][pos.x()] = Some(mark);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all().filter(|&p| !self.is_occupied(p)).collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }

    /// Three of `mark` along any row, column or diagonal.
    pub fn has_won(&self, mark: Mark) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(x, y)| self.grid[y][x] == Some(mark))
        })
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> [Option<Mark>; BOARD_SIZE] {
        self.grid[y]
    }
}
