use serde::{Deserialize, Serialize};

/// Rectangular character image of the observed universe.
///
/// Only `#` (galaxy) and `.` (empty space) are interpreted; other characters
/// are carried along untouched. All rows are expected to have the same
/// length; ragged input is not defended against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cells: Vec<Vec<char>>,
}

pub const GALAXY: char = '#';
pub const SPACE: char = '.';

impl Grid {
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }
}

/// Position of a single galaxy in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Galaxy {
    pub row: usize,
    pub col: usize,
}

/// Indices of all-background rows and columns, each in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyLines {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

/// Both puzzle answers for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSolution {
    pub part1: u64,
    pub part2: u64,
}
