use std::sync::mpsc::Receiver;
use std::thread::sleep;

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info};

use crate::Position;
use crate::config::GameConfig;
use crate::input::{self, Command};
use crate::render;
use crate::snake::Snake;
use crate::term::Canvas;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    Over,
}

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit { score: u32 },
    GameOver { score: u32 },
}

/// The whole mutable model of one game. Only `apply` and `tick` change it.
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    collectible: Position,
    score: u32,
    status: Status,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as `new`, but collectible placement is reproducible.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let snake = Snake::new(config.initial_snake.clone(), config.initial_direction);
        let collectible = config.initial_collectible;
        GameState { config, snake, collectible, score: 0, status: Status::Running, rng }
    }

    /// Puts the snake and the collectible somewhere else, leaving score and status alone.
    pub fn place(&mut self, snake: Snake, collectible: Position) {
        self.snake = snake;
        self.collectible = collectible;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn collectible(&self) -> Position {
        self.collectible
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    /// Handles one player command. Turns are taken while running or paused,
    /// so a turn made during a pause applies once play resumes. Quitting is
    /// up to the caller.
    pub fn apply(&mut self, command: Command) {
        if command == Command::TogglePause {
            self.toggle_pause();
            return;
        }

        if let Some(dir) = command.direction() {
            if self.status != Status::Over && !self.snake.set_direction(dir) {
                debug!(requested = ?dir, current = ?self.snake.direction(), "ignoring reversal");
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::Over => Status::Over,
        };
        info!(status = ?self.status, "pause toggled");
    }

    /// Advances the game by one step if it is running.
    pub fn tick(&mut self) {
        if self.status == Status::Running {
            self.advance();
        }
    }

    /// Moves the snake one cell, eating and growing if it lands on the
    /// collectible, then checks for collisions. A collision leaves the
    /// offending position in place and ends the game.
    pub fn advance(&mut self) {
        let head = self.snake.push_head();

        if head == self.collectible {
            self.score += 1;
            debug!(score = self.score, ?head, "collectible consumed");
            if !self.relocate_collectible() {
                info!(score = self.score, "no free cell left on the board");
                self.status = Status::Over;
            }
        } else {
            self.snake.drop_tail();
        }

        if !head.is_within(self.config.width, self.config.height) {
            info!(?head, score = self.score, "snake hit the wall");
            self.status = Status::Over;
        } else if self.snake.bites_itself() {
            info!(?head, score = self.score, "snake ran into itself");
            self.status = Status::Over;
        }
    }

    /// Moves the collectible to a random cell the snake does not cover.
    /// Returns false if there is no such cell.
    ///
    /// While the snake covers less than half of the board this samples
    /// blindly until it misses the snake. Past that it picks from the list
    /// of free cells, so a crowded board cannot stall the game.
    ///
    /// A false return is an end condition of its own: `advance` moves the
    /// game to `Over` when the snake has filled the board.
    pub fn relocate_collectible(&mut self) -> bool {
        let (width, height) = (self.config.width, self.config.height);

        if self.snake.len() * 2 < self.config.area() {
            loop {
                let row = self.rng.gen_range(0..height);
                let col = self.rng.gen_range(0..width);
                let candidate = Position::new(row, col);
                if !self.snake.occupies(candidate) {
                    self.collectible = candidate;
                    return true;
                }
            }
        }

        let snake = &self.snake;
        let free: Vec<Position> = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .filter(|cell| !snake.occupies(*cell))
            .collect();

        match free.choose(&mut self.rng) {
            Some(&cell) => {
                self.collectible = cell;
                true
            }
            None => false,
        }
    }
}

/// Drives a `GameState` at a fixed tick: one command in, one step, one frame out.
pub struct SnakeGame<C: Canvas> {
    canvas: C,
    commands: Receiver<Command>,
    state: GameState,
}

impl<C: Canvas> SnakeGame<C> {
    pub fn new(canvas: C, commands: Receiver<Command>, config: GameConfig) -> Self {
        Self::with_state(canvas, commands, GameState::new(config))
    }

    pub fn with_state(canvas: C, commands: Receiver<Command>, state: GameState) -> Self {
        SnakeGame { canvas, commands, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Runs until the snake crashes or the player quits.
    pub fn play(&mut self) -> Result<Outcome> {
        info!(
            width = self.state.config.width,
            height = self.state.config.height,
            tick_ms = self.state.config.tick.as_millis() as u64,
            "game started"
        );

        while !self.state.is_over() {
            match input::read_command(&self.commands) {
                Some(Command::Quit) => {
                    info!(score = self.state.score, "player quit");
                    return Ok(Outcome::Quit { score: self.state.score });
                }
                Some(cmd) => self.state.apply(cmd),
                None => {}
            }

            self.state.tick();

            if !self.state.is_paused() {
                render::draw_board(&self.state, &mut self.canvas)
                    .context("failed to draw the board")?;
            }

            sleep(self.state.config.tick);
        }

        render::draw_game_over(&self.state, &mut self.canvas)
            .context("failed to draw the game over screen")?;
        sleep(self.state.config.game_over_delay);

        Ok(Outcome::GameOver { score: self.state.score })
    }
}
