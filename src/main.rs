use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, Level};

use term_snake::config::GameConfig;
use term_snake::game::SnakeGame;
use term_snake::input;
use term_snake::term::TermManager;

const LOG_FILE_NAME: &str = "term-snake.log";

fn main() -> Result<()> {
    init_logging();

    let config = GameConfig::default();
    let term = TermManager::new().context("failed to initialize the terminal")?;
    let commands = input::spawn_listener(config.input_capacity)
        .context("failed to start the input listener")?;

    let mut game = SnakeGame::new(term, commands, config);
    let outcome = game.play();

    // The terminal has to be restored before anything gets printed.
    drop(game);

    let outcome = outcome?;
    info!(?outcome, "session finished");
    Ok(())
}

// The screen belongs to the game, so logs go to a file. Without one the game
// simply runs unlogged.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Ok(file) = File::create(&path) {
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(Level::INFO)
            .init();
    }
}
