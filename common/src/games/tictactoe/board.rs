use std::fmt;

use super::types::{GameStatus, Mark};

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Row-major 3x3 grid: `index = row * 3 + col`.
///
/// `Board` is `Copy`; placing a mark always produces a new value and leaves
/// this board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_WIDTH && col < BOARD_WIDTH {
            Some(row * BOARD_WIDTH + col)
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    /// Returns a copy with `mark` at `index`. Legality is the caller's job;
    /// an out-of-range index yields an unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = mark;
        }
        next
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, " {} | {} | {}", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}

pub fn is_legal_move(board: &Board, index: usize, status: GameStatus) -> bool {
    status == GameStatus::InProgress && board.is_empty_at(index)
}
