pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;

use snake::Direction;

/// A cell on the play field. Rows grow downwards, both axes start at zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (d_row, d_col) = dir.delta();
        Position::new(self.row + d_row, self.col + d_col)
    }

    pub fn offset(self, by: Position) -> Self {
        Position::new(self.row + by.row, self.col + by.col)
    }

    pub fn is_within(self, width: i32, height: i32) -> bool {
        (0..height).contains(&self.row) && (0..width).contains(&self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}
