use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::time::Duration;

use term_snake::Position;
use term_snake::config::GameConfig;
use term_snake::game::{GameState, Outcome, SnakeGame, Status};
use term_snake::input::Command;
use term_snake::snake::{Direction, Snake};
use term_snake::term::Frame;

fn fast_config() -> GameConfig {
    GameConfig {
        tick: Duration::ZERO,
        game_over_delay: Duration::ZERO,
        ..GameConfig::default()
    }
}

fn queue(commands: &[Command]) -> (SyncSender<Command>, Receiver<Command>) {
    let (tx, rx) = sync_channel(8);
    for cmd in commands {
        tx.send(*cmd).unwrap();
    }
    (tx, rx)
}

fn session(commands: &[Command], state: GameState) -> (SyncSender<Command>, SnakeGame<Frame>) {
    let (tx, rx) = queue(commands);
    (tx, SnakeGame::with_state(Frame::new(60, 24), rx, state))
}

#[test]
fn runs_into_the_top_wall_without_input() {
    let (_tx, mut game) = session(&[], GameState::with_seed(fast_config(), 11));

    let outcome = game.play().unwrap();

    assert_eq!(outcome, Outcome::GameOver { score: 0 });
    assert_eq!(game.state().status(), Status::Over);
    assert_eq!(game.state().snake().head(), Position::new(-1, 3));
    assert_eq!(game.state().snake().len(), 5);
    assert!(game.canvas().contains_text("Game Over!!"));
    assert!(game.canvas().contains_text("Your score is 0"));
}

#[test]
fn turning_left_hits_the_left_wall() {
    let (_tx, mut game) = session(&[Command::Left], GameState::with_seed(fast_config(), 11));

    let outcome = game.play().unwrap();

    assert_eq!(outcome, Outcome::GameOver { score: 0 });
    assert_eq!(game.state().snake().head(), Position::new(5, -1));
}

#[test]
fn reversing_is_ignored_during_play() {
    let (_tx, mut game) = session(&[Command::Down], GameState::with_seed(fast_config(), 11));

    game.play().unwrap();

    assert_eq!(game.state().snake().direction(), Direction::Up);
    assert_eq!(game.state().snake().head(), Position::new(-1, 3));
}

#[test]
fn quitting_stops_before_the_first_step() {
    let (_tx, mut game) = session(&[Command::Quit], GameState::with_seed(fast_config(), 11));

    let outcome = game.play().unwrap();

    assert_eq!(outcome, Outcome::Quit { score: 0 });
    assert_eq!(game.state().snake().head(), Position::new(5, 3));
    assert_eq!(game.canvas(), &Frame::new(60, 24));
}

#[test]
fn nothing_moves_or_draws_while_paused() {
    let commands = [Command::TogglePause, Command::Up, Command::Left, Command::Quit];
    let (_tx, mut game) = session(&commands, GameState::with_seed(fast_config(), 11));

    let outcome = game.play().unwrap();

    assert_eq!(outcome, Outcome::Quit { score: 0 });
    assert_eq!(game.state().status(), Status::Paused);
    assert_eq!(game.state().snake().head(), Position::new(5, 3));
    assert_eq!(game.state().snake().direction(), Direction::Left);
    assert_eq!(game.canvas(), &Frame::new(60, 24));
}

#[test]
fn turn_queued_during_pause_steers_after_resume() {
    let commands = [Command::TogglePause, Command::Left, Command::TogglePause];
    let (_tx, mut game) = session(&commands, GameState::with_seed(fast_config(), 11));

    let outcome = game.play().unwrap();

    // head (5, 3) heads left once play resumes and leaves through column -1
    assert_eq!(outcome, Outcome::GameOver { score: 0 });
    assert_eq!(game.state().snake().head(), Position::new(5, -1));
}

#[test]
fn eating_on_the_way_counts_in_the_outcome() {
    let mut state = GameState::with_seed(fast_config(), 11);
    let snake = Snake::new(state.config().initial_snake.clone(), Direction::Up);
    state.place(snake, Position::new(4, 3));
    let (_tx, mut game) = session(&[], state);

    let outcome = game.play().unwrap();

    let score = game.state().score();
    assert!(score >= 1);
    assert_eq!(outcome, Outcome::GameOver { score });
    assert_eq!(game.state().snake().len(), 5 + score as usize);
    assert!(!game.state().snake().occupies(game.state().collectible()));
}

#[test]
fn hanging_up_the_input_is_not_an_error() {
    let (tx, mut game) = session(&[Command::Right], GameState::with_seed(fast_config(), 11));
    drop(tx);

    let outcome = game.play().unwrap();

    assert_eq!(outcome, Outcome::GameOver { score: 0 });
    assert_eq!(game.state().snake().head(), Position::new(5, 30));
}
