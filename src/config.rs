use std::time::Duration;

use crate::Position;
use crate::snake::Direction;

pub const BOARD_WIDTH: i32 = 30;
pub const BOARD_HEIGHT: i32 = 15;
pub const TICK_INTERVAL_MS: u64 = 75;
pub const GAME_OVER_DELAY_MS: u64 = 3000;
pub const INPUT_QUEUE_CAPACITY: usize = 4;

/// Fixed parameters of a game session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub tick: Duration,
    /// How long the game-over summary stays up before the process exits.
    pub game_over_delay: Duration,
    /// Tail first, head last.
    pub initial_snake: Vec<Position>,
    pub initial_direction: Direction,
    pub initial_collectible: Position,
    pub input_capacity: usize,
}

impl GameConfig {
    pub fn area(&self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick: Duration::from_millis(TICK_INTERVAL_MS),
            game_over_delay: Duration::from_millis(GAME_OVER_DELAY_MS),
            initial_snake: [(7, 5), (7, 4), (7, 3), (6, 3), (5, 3)]
                .iter()
                .map(|&c| Position::from(c))
                .collect(),
            initial_direction: Direction::Up,
            initial_collectible: Position::new(10, 10),
            input_capacity: INPUT_QUEUE_CAPACITY,
        }
    }
}
